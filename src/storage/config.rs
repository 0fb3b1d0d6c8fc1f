// 存储配置定义

use serde::{Deserialize, Serialize};

/// 数据库配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// 数据库文件路径（相对于进程工作目录）
    pub db_path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            db_path: "bmi_data.db".to_string(),
        }
    }
}
