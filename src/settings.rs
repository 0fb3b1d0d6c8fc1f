use std::path::PathBuf;

use anyhow::Result;
use tokio::sync::RwLock;
use tracing::warn;

use crate::models::{AppConfig, PersistedAppConfig};

/// 配置文件默认位置（相对于进程工作目录）
pub const DEFAULT_SETTINGS_PATH: &str = "bmi-tracker.json";

pub struct SettingsManager {
    path: PathBuf,
    data: RwLock<PersistedAppConfig>,
}

impl SettingsManager {
    pub async fn new(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let initial = match tokio::fs::read(&path).await {
            Ok(bytes) if !bytes.is_empty() => {
                serde_json::from_slice::<PersistedAppConfig>(&bytes).unwrap_or_else(|e| {
                    warn!("配置文件解析失败，使用默认配置: {}", e);
                    PersistedAppConfig::default()
                })
            }
            _ => {
                let default = PersistedAppConfig::default();
                let json = serde_json::to_string_pretty(&default)?;
                tokio::fs::write(&path, json).await?;
                default
            }
        };

        Ok(Self {
            path,
            data: RwLock::new(initial),
        })
    }

    pub async fn get(&self) -> PersistedAppConfig {
        self.data.read().await.clone()
    }

    pub async fn update(&self, update: AppConfig) -> Result<PersistedAppConfig> {
        let mut config = self.data.write().await;

        if let Some(database) = update.database {
            config.database = database;
        }
        if let Some(log) = update.log {
            config.log = log;
        }
        if let Some(chart) = update.chart {
            config.chart = chart;
        }

        self.save(&config).await?;
        Ok(config.clone())
    }

    async fn save(&self, config: &PersistedAppConfig) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}
