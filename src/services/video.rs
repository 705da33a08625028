use crate::models::DailyTaskInfo;
use crate::shutdown::ShutdownSignal;
use anyhow::Result;
use async_trait::async_trait;

/// 视频能力
#[async_trait]
pub trait VideoService: Send + Sync {
    /// 观看并分享视频
    ///
    /// `status` 为今日任务完成情况，查询失败时为 `None`，由实现决定如何处理。
    async fn watch_and_share(
        &self,
        status: Option<&DailyTaskInfo>,
        shutdown: &ShutdownSignal,
    ) -> Result<()>;
}
