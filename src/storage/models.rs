// 数据模型定义 - 数据库实体结构

use chrono::{Local, NaiveDateTime, SubsecRound};

use crate::classifier::{bmi_of, classify, Category};
use crate::error::StorageError;
use crate::utils::validation::Reading;

/// 存储与展示统一使用的时间格式（本地时间，精确到秒）
pub const RECORDED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 获取当前本地时间，截断到秒
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

/// 已持久化的测量记录
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRecord {
    pub id: i64,
    pub owner_name: String,
    pub weight_kg: f64,
    pub height_m: f64,
    pub bmi: f64,
    pub category: Category,
    pub recorded_at: NaiveDateTime,
}

/// 待插入的测量记录（id 由数据库分配）
#[derive(Debug, Clone, PartialEq)]
pub struct NewMeasurement {
    pub owner_name: String,
    pub weight_kg: f64,
    pub height_m: f64,
    pub bmi: f64,
    pub category: Category,
    /// 为空时由存储层填入当前时间
    pub recorded_at: Option<NaiveDateTime>,
}

impl NewMeasurement {
    /// 由校验后的读数计算 BMI 与分类
    pub fn from_reading(owner_name: impl Into<String>, reading: Reading) -> Self {
        let bmi = bmi_of(reading.weight_kg, reading.height_m);
        Self {
            owner_name: owner_name.into(),
            weight_kg: reading.weight_kg,
            height_m: reading.height_m,
            bmi,
            category: classify(bmi),
            recorded_at: None,
        }
    }
}

/// bmi_records 表的原始行，category 以文本形式存储
#[derive(Debug, Clone, sqlx::FromRow)]
pub(crate) struct MeasurementRow {
    pub id: i64,
    pub owner_name: String,
    pub weight_kg: f64,
    pub height_m: f64,
    pub bmi: f64,
    pub category: String,
    pub recorded_at: NaiveDateTime,
}

impl TryFrom<MeasurementRow> for MeasurementRecord {
    type Error = StorageError;

    fn try_from(row: MeasurementRow) -> Result<Self, Self::Error> {
        // 分类是写入时的快照，读取时只解析不重算
        let category = row
            .category
            .parse::<Category>()
            .map_err(|e| StorageError::CorruptRow {
                id: row.id,
                reason: e.to_string(),
            })?;

        Ok(MeasurementRecord {
            id: row.id,
            owner_name: row.owner_name,
            weight_kg: row.weight_kg,
            height_m: row.height_m,
            bmi: row.bmi,
            category,
            recorded_at: row.recorded_at,
        })
    }
}
