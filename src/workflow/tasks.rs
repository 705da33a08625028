//! 每日任务的各个步骤 - 流程层
//!
//! 每个步骤只做分支判断并委托给对应的能力服务，
//! 顺序由 [`crate::orchestrator::DailyTaskPipeline`] 决定。

use crate::config::DailyTaskOptions;
use crate::locale::TaskName;
use crate::models::exp::DAILY_LOGIN;
use crate::models::ExpDictionary;
use crate::services::{
    AccountService, ChargeService, CoinService, DonateCoinService, LiveService, MangaService,
    VideoService, VipPrivilegeService,
};
use crate::workflow::interceptor::FailurePolicy;
use crate::workflow::task::DailyTask;
use crate::workflow::task_ctx::DailyTaskCtx;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info};

/// 大会员漫画权益的档位
pub const MANGA_VIP_REWARD_TIER: u32 = 1;

/// 达到该等级后可选择不再投币
pub const SAVE_COINS_LEVEL: u8 = 6;

/// 登录
///
/// 后续所有任务都依赖登录身份，因此失败总是终止流程。
pub struct Login {
    account: Arc<dyn AccountService>,
    exp: ExpDictionary,
}

impl Login {
    pub fn new(account: Arc<dyn AccountService>, exp: ExpDictionary) -> Self {
        Self { account, exp }
    }
}

#[async_trait]
impl DailyTask for Login {
    fn id(&self) -> &'static str {
        "login"
    }

    fn name(&self) -> Option<TaskName> {
        Some(TaskName::Login)
    }

    fn policy(&self) -> FailurePolicy {
        FailurePolicy::Rethrow
    }

    async fn run(&self, ctx: &mut DailyTaskCtx) -> Result<()> {
        let user = self
            .account
            .login_by_cookie(&ctx.shutdown)
            .await?
            .ok_or_else(|| anyhow!(ctx.locale.login_failed()))?;

        info!("{}", ctx.locale.login_succeeded(self.exp.get(DAILY_LOGIN)));
        ctx.user_info = Some(user);
        debug!("当前账户: {}", ctx);
        Ok(())
    }
}

/// 获取今日任务完成情况
pub struct FetchDailyTaskStatus {
    account: Arc<dyn AccountService>,
}

impl FetchDailyTaskStatus {
    pub fn new(account: Arc<dyn AccountService>) -> Self {
        Self { account }
    }
}

#[async_trait]
impl DailyTask for FetchDailyTaskStatus {
    fn id(&self) -> &'static str {
        "daily_task_status"
    }

    fn name(&self) -> Option<TaskName> {
        None
    }

    async fn run(&self, ctx: &mut DailyTaskCtx) -> Result<()> {
        let status = self.account.daily_task_status(&ctx.shutdown).await?;
        debug!("今日任务完成情况: {:?}", status);
        ctx.daily_task_info = Some(status);
        Ok(())
    }
}

/// 观看、分享视频
pub struct WatchAndShareVideo {
    video: Arc<dyn VideoService>,
    options: DailyTaskOptions,
}

impl WatchAndShareVideo {
    pub fn new(video: Arc<dyn VideoService>, options: DailyTaskOptions) -> Self {
        Self { video, options }
    }
}

#[async_trait]
impl DailyTask for WatchAndShareVideo {
    fn id(&self) -> &'static str {
        "watch_and_share_video"
    }

    fn name(&self) -> Option<TaskName> {
        Some(TaskName::WatchAndShareVideo)
    }

    async fn run(&self, ctx: &mut DailyTaskCtx) -> Result<()> {
        if !self.options.is_watch_video && !self.options.is_share_video {
            info!("{}", ctx.locale.task_disabled());
            return Ok(());
        }
        self.video
            .watch_and_share(ctx.daily_task_info.as_ref(), &ctx.shutdown)
            .await
    }
}

/// 投币
pub struct AddCoinsForVideo {
    donate_coin: Arc<dyn DonateCoinService>,
    options: DailyTaskOptions,
}

impl AddCoinsForVideo {
    pub fn new(donate_coin: Arc<dyn DonateCoinService>, options: DailyTaskOptions) -> Self {
        Self {
            donate_coin,
            options,
        }
    }
}

#[async_trait]
impl DailyTask for AddCoinsForVideo {
    fn id(&self) -> &'static str {
        "add_coins_for_video"
    }

    fn name(&self) -> Option<TaskName> {
        Some(TaskName::AddCoinsForVideo)
    }

    async fn run(&self, ctx: &mut DailyTaskCtx) -> Result<()> {
        if self.options.save_coins_when_lv6 && ctx.user()?.level() >= SAVE_COINS_LEVEL {
            info!("{}", ctx.locale.save_coins_at_lv6());
            return Ok(());
        }
        self.donate_coin.add_coins_for_videos(&ctx.shutdown).await
    }
}

/// 直播中心签到
pub struct LiveSign {
    live: Arc<dyn LiveService>,
}

impl LiveSign {
    pub fn new(live: Arc<dyn LiveService>) -> Self {
        Self { live }
    }
}

#[async_trait]
impl DailyTask for LiveSign {
    fn id(&self) -> &'static str {
        "live_sign"
    }

    fn name(&self) -> Option<TaskName> {
        Some(TaskName::LiveSign)
    }

    async fn run(&self, ctx: &mut DailyTaskCtx) -> Result<()> {
        self.live.live_sign(&ctx.shutdown).await
    }
}

/// 漫画签到
pub struct MangaSign {
    manga: Arc<dyn MangaService>,
}

impl MangaSign {
    pub fn new(manga: Arc<dyn MangaService>) -> Self {
        Self { manga }
    }
}

#[async_trait]
impl DailyTask for MangaSign {
    fn id(&self) -> &'static str {
        "manga_sign"
    }

    fn name(&self) -> Option<TaskName> {
        Some(TaskName::MangaSign)
    }

    async fn run(&self, ctx: &mut DailyTaskCtx) -> Result<()> {
        self.manga.manga_sign(&ctx.shutdown).await
    }
}

/// 漫画阅读
pub struct MangaRead {
    manga: Arc<dyn MangaService>,
}

impl MangaRead {
    pub fn new(manga: Arc<dyn MangaService>) -> Self {
        Self { manga }
    }
}

#[async_trait]
impl DailyTask for MangaRead {
    fn id(&self) -> &'static str {
        "manga_read"
    }

    fn name(&self) -> Option<TaskName> {
        Some(TaskName::MangaRead)
    }

    async fn run(&self, ctx: &mut DailyTaskCtx) -> Result<()> {
        self.manga.manga_read(&ctx.shutdown).await
    }
}

/// 直播中心的银瓜子兑换硬币
pub struct ExchangeSilverToCoin {
    live: Arc<dyn LiveService>,
    coin: Arc<dyn CoinService>,
}

impl ExchangeSilverToCoin {
    pub fn new(live: Arc<dyn LiveService>, coin: Arc<dyn CoinService>) -> Self {
        Self { live, coin }
    }
}

#[async_trait]
impl DailyTask for ExchangeSilverToCoin {
    fn id(&self) -> &'static str {
        "exchange_silver_to_coin"
    }

    fn name(&self) -> Option<TaskName> {
        Some(TaskName::ExchangeSilverToCoin)
    }

    async fn run(&self, ctx: &mut DailyTaskCtx) -> Result<()> {
        if !self.live.exchange_silver_to_coin(&ctx.shutdown).await? {
            return Ok(());
        }

        // 兑换成功才查询余额
        let balance = self.coin.coin_balance(&ctx.shutdown).await?;
        info!("{}", ctx.locale.coin_balance(balance));
        Ok(())
    }
}

/// 每月领取大会员福利
pub struct ReceiveVipPrivilege {
    vip_privilege: Arc<dyn VipPrivilegeService>,
    account: Arc<dyn AccountService>,
}

impl ReceiveVipPrivilege {
    pub fn new(
        vip_privilege: Arc<dyn VipPrivilegeService>,
        account: Arc<dyn AccountService>,
    ) -> Self {
        Self {
            vip_privilege,
            account,
        }
    }
}

#[async_trait]
impl DailyTask for ReceiveVipPrivilege {
    fn id(&self) -> &'static str {
        "receive_vip_privilege"
    }

    fn name(&self) -> Option<TaskName> {
        Some(TaskName::ReceiveVipPrivilege)
    }

    async fn run(&self, ctx: &mut DailyTaskCtx) -> Result<()> {
        let claimed = self
            .vip_privilege
            .receive_vip_privilege(ctx.user()?, &ctx.shutdown)
            .await?;
        if !claimed {
            return Ok(());
        }

        // 领取成功后余额可能变化，刷新一次账户信息；刷新失败不影响本任务
        match self.account.login_by_cookie(&ctx.shutdown).await {
            Ok(Some(user)) => {
                info!("{}", ctx.locale.refresh_succeeded());
                ctx.refreshed_user_info = Some(user);
            }
            Ok(None) => {
                error!("{}", ctx.locale.refresh_failed(ctx.locale.login_failed()));
            }
            Err(e) => {
                error!("{}", ctx.locale.refresh_failed(&format!("{:#}", e)));
            }
        }
        Ok(())
    }
}

/// 每月领取大会员漫画权益
pub struct ReceiveMangaVipReward {
    manga: Arc<dyn MangaService>,
}

impl ReceiveMangaVipReward {
    pub fn new(manga: Arc<dyn MangaService>) -> Self {
        Self { manga }
    }
}

#[async_trait]
impl DailyTask for ReceiveMangaVipReward {
    fn id(&self) -> &'static str {
        "receive_manga_vip_reward"
    }

    fn name(&self) -> Option<TaskName> {
        Some(TaskName::ReceiveMangaVipReward)
    }

    async fn run(&self, ctx: &mut DailyTaskCtx) -> Result<()> {
        self.manga
            .receive_manga_vip_reward(MANGA_VIP_REWARD_TIER, ctx.user()?, &ctx.shutdown)
            .await
    }
}

/// 每月为自己充电
///
/// 使用登录时的快照，不使用领取福利后刷新的快照。
pub struct Charge {
    charge: Arc<dyn ChargeService>,
}

impl Charge {
    pub fn new(charge: Arc<dyn ChargeService>) -> Self {
        Self { charge }
    }
}

#[async_trait]
impl DailyTask for Charge {
    fn id(&self) -> &'static str {
        "charge"
    }

    fn name(&self) -> Option<TaskName> {
        Some(TaskName::Charge)
    }

    async fn run(&self, ctx: &mut DailyTaskCtx) -> Result<()> {
        self.charge.charge(ctx.user()?, &ctx.shutdown).await
    }
}
