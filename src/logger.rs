// 日志初始化 - 写入按天轮转的日志文件，标准输出留给表单

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::LocalTime;

use crate::models::LogConfig;

/// 日志文件名前缀
pub const LOG_FILE_NAME: &str = "bmi-tracker.log";

/// 解析日志级别，无法识别时使用 INFO
pub fn parse_level(level: &str) -> tracing::Level {
    tracing::Level::from_str(level.trim()).unwrap_or(tracing::Level::INFO)
}

/// 初始化日志系统
///
/// 返回的 guard 需要持有到程序退出，drop 时会刷新缓冲中的日志
pub fn init(config: &LogConfig) -> Result<WorkerGuard> {
    let log_dir = PathBuf::from(&config.dir);

    // 创建日志目录
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("创建日志目录失败: {:?}", log_dir))?;

    // 配置日志输出到文件（每天轮转）
    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // 使用本地时区
    let timer = LocalTime::new(
        time::format_description::parse(
            "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]",
        )
        .context("日志时间格式无效")?,
    );

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(parse_level(&config.level))
        .with_writer(non_blocking)
        .with_timer(timer)
        .with_ansi(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("日志系统已被初始化")?;

    Ok(guard)
}
