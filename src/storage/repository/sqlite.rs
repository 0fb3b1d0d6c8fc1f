// SQLite 数据库实现

use super::MeasurementRepository;
use crate::error::StorageResult;
use crate::storage::models::*;
use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

/// SQLite 数据库实现
///
/// 只持有一个连接，界面单线程驱动，不存在并发写入
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    /// 打开（必要时创建）数据库文件
    ///
    /// 不会建表，调用方需要再调用 `initialize`
    pub async fn connect(db_path: &str) -> StorageResult<Self> {
        info!("打开 SQLite 数据库: {}", db_path);

        // 确保数据库文件的目录存在
        if let Some(parent) = std::path::Path::new(db_path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        // ?mode=rwc 确保文件不存在时创建
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await?;

        Ok(Self { pool })
    }

    /// 打开数据库并初始化表结构
    pub async fn new(db_path: &str) -> StorageResult<Self> {
        let repo = Self::connect(db_path).await?;
        repo.initialize().await?;
        Ok(repo)
    }

    /// 获取连接池引用（测试中直接写入原始行）
    #[cfg(test)]
    pub(crate) fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl MeasurementRepository for SqliteRepository {
    async fn initialize(&self) -> StorageResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS bmi_records (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                owner_name TEXT NOT NULL,
                weight_kg REAL NOT NULL CHECK (weight_kg > 0),
                height_m REAL NOT NULL CHECK (height_m > 0),
                bmi REAL NOT NULL,
                category TEXT NOT NULL,
                recorded_at TEXT NOT NULL
            )
        "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_bmi_records_owner ON bmi_records(owner_name, recorded_at)",
        )
        .execute(&self.pool)
        .await?;

        info!("数据库表初始化完成");
        Ok(())
    }

    async fn insert(&self, measurement: &NewMeasurement) -> StorageResult<MeasurementRecord> {
        let recorded_at = measurement.recorded_at.unwrap_or_else(local_now);

        let result = sqlx::query(
            r#"
            INSERT INTO bmi_records (owner_name, weight_kg, height_m, bmi, category, recorded_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
        )
        .bind(&measurement.owner_name)
        .bind(measurement.weight_kg)
        .bind(measurement.height_m)
        .bind(measurement.bmi)
        .bind(measurement.category.as_str())
        .bind(recorded_at.format(RECORDED_AT_FORMAT).to_string())
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!("插入 BMI 记录: id={}, owner={}", id, measurement.owner_name);

        Ok(MeasurementRecord {
            id,
            owner_name: measurement.owner_name.clone(),
            weight_kg: measurement.weight_kg,
            height_m: measurement.height_m,
            bmi: measurement.bmi,
            category: measurement.category,
            recorded_at,
        })
    }

    async fn query_by_owner(&self, owner_name: &str) -> StorageResult<Vec<MeasurementRecord>> {
        let rows = sqlx::query_as::<_, MeasurementRow>(
            r#"
            SELECT id, owner_name, weight_kg, height_m, bmi, category, recorded_at
            FROM bmi_records
            WHERE owner_name = ?
            ORDER BY recorded_at ASC, id ASC
            "#,
        )
        .bind(owner_name)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(MeasurementRecord::try_from).collect()
    }

    async fn count(&self) -> StorageResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bmi_records")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn close(&self) {
        self.pool.close().await;
        info!("数据库连接已关闭");
    }

    fn db_type(&self) -> &str {
        "sqlite"
    }
}
