use crate::shutdown::ShutdownSignal;
use anyhow::Result;
use async_trait::async_trait;

/// 投币能力
#[async_trait]
pub trait DonateCoinService: Send + Sync {
    async fn add_coins_for_videos(&self, shutdown: &ShutdownSignal) -> Result<()>;
}

/// 硬币余额查询
#[async_trait]
pub trait CoinService: Send + Sync {
    async fn coin_balance(&self, shutdown: &ShutdownSignal) -> Result<f64>;
}
