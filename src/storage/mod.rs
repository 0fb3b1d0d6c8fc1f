// 存储模块 - 测量记录的持久化层

// 子模块
pub mod config;
pub mod models;
pub mod repository;

// 重新导出主要类型
pub use config::DatabaseConfig;
pub use models::*;
pub use repository::MeasurementRepository;

// 重新导出具体实现
pub use repository::sqlite::SqliteRepository;
