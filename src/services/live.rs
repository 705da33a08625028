use crate::shutdown::ShutdownSignal;
use anyhow::Result;
use async_trait::async_trait;

/// 直播中心能力
#[async_trait]
pub trait LiveService: Send + Sync {
    /// 直播中心签到
    async fn live_sign(&self, shutdown: &ShutdownSignal) -> Result<()>;

    /// 银瓜子兑换硬币，返回是否实际兑换成功
    async fn exchange_silver_to_coin(&self, shutdown: &ShutdownSignal) -> Result<bool>;
}
