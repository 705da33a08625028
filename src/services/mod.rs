//! 业务能力层
//!
//! 只描述"我能做什么"，具体的 HTTP 调用由宿主程序实现这些 trait 后注入。

pub mod account;
pub mod charge;
pub mod coin;
pub mod live;
pub mod manga;
pub mod video;
pub mod vip_privilege;

pub use account::AccountService;
pub use charge::ChargeService;
pub use coin::{CoinService, DonateCoinService};
pub use live::LiveService;
pub use manga::MangaService;
pub use video::VideoService;
pub use vip_privilege::VipPrivilegeService;

use std::sync::Arc;

/// 每日任务依赖的全部能力
#[derive(Clone)]
pub struct Services {
    pub account: Arc<dyn AccountService>,
    pub video: Arc<dyn VideoService>,
    pub donate_coin: Arc<dyn DonateCoinService>,
    pub live: Arc<dyn LiveService>,
    pub coin: Arc<dyn CoinService>,
    pub manga: Arc<dyn MangaService>,
    pub vip_privilege: Arc<dyn VipPrivilegeService>,
    pub charge: Arc<dyn ChargeService>,
}

impl Services {
    /// 由同一个对象提供全部能力
    pub fn from_single<T>(provider: Arc<T>) -> Self
    where
        T: AccountService
            + VideoService
            + DonateCoinService
            + LiveService
            + CoinService
            + MangaService
            + VipPrivilegeService
            + ChargeService
            + 'static,
    {
        Self {
            account: provider.clone(),
            video: provider.clone(),
            donate_coin: provider.clone(),
            live: provider.clone(),
            coin: provider.clone(),
            manga: provider.clone(),
            vip_privilege: provider.clone(),
            charge: provider,
        }
    }
}
