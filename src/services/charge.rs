use crate::models::UserInfo;
use crate::shutdown::ShutdownSignal;
use anyhow::Result;
use async_trait::async_trait;

/// B币券充电能力
#[async_trait]
pub trait ChargeService: Send + Sync {
    async fn charge(&self, user: &UserInfo, shutdown: &ShutdownSignal) -> Result<()>;
}
