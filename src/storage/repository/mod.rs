// Repository 抽象层 - 定义测量记录的存储接口

pub mod sqlite;

use super::models::*;
use crate::error::StorageResult;
use async_trait::async_trait;

/// 测量记录存储接口
///
/// 记录只追加不修改，没有更新和删除操作
#[async_trait]
pub trait MeasurementRepository: Send + Sync {
    /// 初始化表结构（幂等，每次启动都会调用）
    async fn initialize(&self) -> StorageResult<()>;

    /// 追加一条记录，返回带 id 和记录时间的完整记录
    async fn insert(&self, measurement: &NewMeasurement) -> StorageResult<MeasurementRecord>;

    /// 按名字精确匹配（区分大小写），按记录时间升序
    ///
    /// 没有记录时返回空列表
    async fn query_by_owner(&self, owner_name: &str) -> StorageResult<Vec<MeasurementRecord>>;

    /// 记录总数
    async fn count(&self) -> StorageResult<i64>;

    /// 释放底层连接
    async fn close(&self);

    /// 获取数据库类型标识
    fn db_type(&self) -> &str;
}
