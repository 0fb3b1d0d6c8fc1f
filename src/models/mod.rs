// 配置模型 - 持久化到 bmi-tracker.json 的结构

use serde::{Deserialize, Serialize};

pub use crate::storage::DatabaseConfig;

/// 配置更新请求，只覆盖提供的字段
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// 数据库配置
    pub database: Option<DatabaseConfig>,
    /// 日志配置
    pub log: Option<LogConfig>,
    /// 趋势图配置
    pub chart: Option<ChartSettings>,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// 日志目录（相对于进程工作目录）
    pub dir: String,
    /// 最低日志级别（trace/debug/info/warn/error）
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: "logs".to_string(),
            level: "info".to_string(),
        }
    }
}

/// 趋势图尺寸（字符）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub width: usize,
    pub height: usize,
}

impl ChartSettings {
    pub const MIN_WIDTH: usize = 10;
    pub const MAX_WIDTH: usize = 500;
    pub const MIN_HEIGHT: usize = 3;
    pub const MAX_HEIGHT: usize = 200;

    /// 限制在可绘制范围内，配置文件可能被手工修改
    pub fn clamped(self) -> Self {
        Self {
            width: self.width.clamp(Self::MIN_WIDTH, Self::MAX_WIDTH),
            height: self.height.clamp(Self::MIN_HEIGHT, Self::MAX_HEIGHT),
        }
    }
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            width: 60,
            height: 15,
        }
    }
}

/// 持久化的完整配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedAppConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub chart: ChartSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config: PersistedAppConfig =
            serde_json::from_str(r#"{ "log": { "level": "debug" } }"#).unwrap();
        assert_eq!(config.database.db_path, "bmi_data.db");
        assert_eq!(config.log.dir, "logs");
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.chart, ChartSettings::default());
    }

    #[test]
    fn test_chart_settings_clamped() {
        let huge = ChartSettings {
            width: 1_000_000_000_000,
            height: usize::MAX,
        }
        .clamped();
        assert_eq!(huge, ChartSettings { width: 500, height: 200 });

        let tiny = ChartSettings { width: 0, height: 1 }.clamped();
        assert_eq!(tiny, ChartSettings { width: 10, height: 3 });
    }
}
