//! 应用状态与操作处理器
//!
//! 表单的三个操作（计算、查看历史、趋势图）都在这里实现：
//! - 校验输入
//! - 计算并分类 BMI
//! - 读写存储
//!
//! 处理器只返回结果或错误，如何展示由 ui 层决定

use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::{error, info, warn};

use crate::classifier::Category;
use crate::error::{AppError, ValidationError};
use crate::storage::{MeasurementRecord, MeasurementRepository, NewMeasurement};
use crate::utils::validation::{parse_reading, require_owner};

/// 查询结果为空时的提示
pub const NO_HISTORY_NOTICE: &str = "No BMI records found for this user.";
pub const NO_TREND_NOTICE: &str = "No BMI data to display.";

/// 表单字段的原始文本
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub weight: String,
    pub height: String,
}

/// 一次成功的计算
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub record: MeasurementRecord,
}

impl Calculation {
    /// 结果显示文本
    pub fn message(&self) -> String {
        format!(
            "{}, your BMI is {:.2} ({}).",
            self.record.owner_name, self.record.bmi, self.record.category
        )
    }
}

/// 历史记录视图
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryView {
    Records {
        owner: String,
        rows: Vec<MeasurementRecord>,
    },
    Empty {
        owner: String,
    },
}

/// 趋势图中的一个点
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPoint {
    pub recorded_at: NaiveDateTime,
    pub bmi: f64,
    pub category: Category,
}

/// 趋势图视图
#[derive(Debug, Clone, PartialEq)]
pub enum TrendView {
    Series {
        owner: String,
        points: Vec<TrendPoint>,
    },
    Empty {
        owner: String,
    },
}

/// 应用状态
///
/// 持有当前表单字段和存储句柄，每个处理器都通过它访问数据
pub struct AppState {
    pub form: FormFields,
    store: Arc<dyn MeasurementRepository>,
}

impl AppState {
    pub fn new(store: Arc<dyn MeasurementRepository>) -> Self {
        Self {
            form: FormFields::default(),
            store,
        }
    }

    /// 获取存储句柄
    pub fn store(&self) -> &Arc<dyn MeasurementRepository> {
        &self.store
    }

    /// 计算 BMI 并保存
    ///
    /// 校验失败时不会访问存储。保存成功后清空体重和身高，保留名字
    pub async fn calculate(&mut self) -> Result<Calculation, AppError> {
        let owner = self.form.name.trim().to_string();

        let reading = parse_reading(&self.form.weight, &self.form.height).map_err(|e| {
            warn!("输入校验失败: {}", e);
            e
        })?;

        let measurement = NewMeasurement::from_reading(owner, reading);
        // 极端输入会让 BMI 上溢为 inf 或下溢为 0
        if !measurement.bmi.is_finite() || measurement.bmi <= 0.0 {
            warn!("BMI 超出范围: {}", measurement.bmi);
            return Err(ValidationError::OutOfRange {
                bmi: measurement.bmi,
            }
            .into());
        }
        let record = self.store.insert(&measurement).await.map_err(|e| {
            error!("保存 BMI 记录失败: {}", e);
            e
        })?;

        info!(
            "已保存 BMI 记录: id={}, bmi={:.2}, category={}",
            record.id, record.bmi, record.category
        );

        self.form.weight.clear();
        self.form.height.clear();

        Ok(Calculation { record })
    }

    /// 查看当前名字的历史记录
    pub async fn view_history(&self) -> Result<HistoryView, AppError> {
        let owner = self.current_owner()?;
        let rows = self.load(&owner).await?;

        if rows.is_empty() {
            return Ok(HistoryView::Empty { owner });
        }
        Ok(HistoryView::Records { owner, rows })
    }

    /// 获取当前名字的 BMI 趋势
    pub async fn show_trend(&self) -> Result<TrendView, AppError> {
        let owner = self.current_owner()?;
        let rows = self.load(&owner).await?;

        if rows.is_empty() {
            return Ok(TrendView::Empty { owner });
        }

        let points = rows
            .iter()
            .map(|r| TrendPoint {
                recorded_at: r.recorded_at,
                bmi: r.bmi,
                category: r.category,
            })
            .collect();
        Ok(TrendView::Series { owner, points })
    }

    fn current_owner(&self) -> Result<String, AppError> {
        let owner = require_owner(&self.form.name).map_err(|e| {
            warn!("查询前未填写名字");
            e
        })?;
        Ok(owner.to_string())
    }

    async fn load(&self, owner: &str) -> Result<Vec<MeasurementRecord>, AppError> {
        let rows = self.store.query_by_owner(owner).await.map_err(|e| {
            error!("查询 BMI 记录失败: {}", e);
            e
        })?;
        info!("查询到 {} 条 BMI 记录", rows.len());
        Ok(rows)
    }
}
