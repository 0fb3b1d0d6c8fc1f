// BMI 记录器 - 主库

// 声明模块
pub mod app;
pub mod classifier;
pub mod error;
pub mod logger;
pub mod models;
pub mod settings;
pub mod storage;
pub mod ui;
pub mod utils;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use app::AppState;
use settings::{SettingsManager, DEFAULT_SETTINGS_PATH};
use storage::{MeasurementRepository, SqliteRepository};

/// 应用程序入口点
///
/// 启动步骤：
/// 1. 读取配置文件
/// 2. 初始化日志系统
/// 3. 打开数据库并初始化表结构（失败则中止启动）
/// 4. 运行终端表单，直到用户退出
/// 5. 关闭数据库连接
pub async fn run() -> Result<()> {
    let settings = SettingsManager::new(PathBuf::from(DEFAULT_SETTINGS_PATH))
        .await
        .context("Error loading settings")?;
    let config = settings.get().await;

    // guard 持有到函数结束，确保日志写入文件
    let _log_guard = logger::init(&config.log)?;
    info!("启动 BMI 记录器...");

    let repo = SqliteRepository::new(&config.database.db_path)
        .await
        .context("Error initializing database")?;
    let mut state = AppState::new(Arc::new(repo));
    info!(
        "存储已就绪: type={}, path={}",
        state.store().db_type(),
        config.database.db_path
    );

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let outcome = ui::run_form(&mut state, &settings, stdin.lock(), &mut stdout).await;

    state.store().close().await;
    info!("BMI 记录器已退出");

    outcome
}
