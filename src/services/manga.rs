use crate::models::UserInfo;
use crate::shutdown::ShutdownSignal;
use anyhow::Result;
use async_trait::async_trait;

/// 漫画能力
#[async_trait]
pub trait MangaService: Send + Sync {
    async fn manga_sign(&self, shutdown: &ShutdownSignal) -> Result<()>;

    async fn manga_read(&self, shutdown: &ShutdownSignal) -> Result<()>;

    /// 领取大会员漫画权益，`reason_id` 为权益档位
    async fn receive_manga_vip_reward(
        &self,
        reason_id: u32,
        user: &UserInfo,
        shutdown: &ShutdownSignal,
    ) -> Result<()>;
}
