//! 工具函数模块
//!
//! 目前只包含表单输入校验

pub mod validation;

// 重新导出常用函数
pub use validation::*;
