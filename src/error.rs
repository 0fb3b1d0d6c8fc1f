// 错误类型定义

use thiserror::Error;

/// 输入字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Weight,
    Height,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Weight => f.write_str("weight"),
            Field::Height => f.write_str("height"),
        }
    }
}

/// 输入校验错误，不会触发任何写入
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please enter valid positive numbers for weight and height. ({field} is not a number: {text:?})")]
    NotANumber { field: Field, text: String },

    #[error("Please enter valid positive numbers for weight and height. ({field} must be positive, got {value})")]
    NotPositive { field: Field, value: f64 },

    #[error("Please enter valid positive numbers for weight and height. (BMI {bmi} is out of range)")]
    OutOfRange { bmi: f64 },

    #[error("Please enter your name first.")]
    MissingOwner,
}

/// 存储层错误
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt record {id}: {reason}")]
    CorruptRow { id: i64, reason: String },
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// 操作处理器返回的错误
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Settings error: {0}")]
    Settings(String),
}

impl AppError {
    /// 展示给用户的标题
    pub fn title(&self) -> &'static str {
        match self {
            AppError::Validation(ValidationError::MissingOwner) => "Missing Info",
            AppError::Validation(_) => "Input Error",
            AppError::Storage(_) => "Database Error",
            AppError::Settings(_) => "Settings Error",
        }
    }
}
