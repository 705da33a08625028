//! 测试用的服务替身
//!
//! [`MockBili`] 实现全部服务 trait，按顺序记录每次调用，并可指定哪些调用失败。

use crate::models::{DailyTaskInfo, LevelInfo, UserInfo};
use crate::services::{
    AccountService, ChargeService, CoinService, DonateCoinService, LiveService, MangaService,
    Services, VideoService, VipPrivilegeService,
};
use crate::shutdown::ShutdownSignal;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;

/// 被记录的服务调用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Call {
    Login,
    DailyTaskStatus,
    WatchAndShare,
    AddCoins,
    LiveSign,
    ExchangeSilver,
    CoinBalance,
    MangaSign,
    MangaRead,
    MangaVipReward,
    VipPrivilege,
    Charge,
}

/// 登录调用的返回行为
#[derive(Debug, Clone)]
pub enum LoginBehavior {
    User(UserInfo),
    NoUser,
    Fail,
}

#[derive(Debug)]
pub struct MockBili {
    calls: Mutex<Vec<Call>>,
    login: LoginBehavior,
    refresh: LoginBehavior,
    failing: HashSet<Call>,
    daily_task_info: DailyTaskInfo,
    exchange_succeeds: bool,
    privilege_claimed: bool,
    coin_balance: f64,
    watch_status: Mutex<Option<Option<DailyTaskInfo>>>,
    manga_reward: Mutex<Option<(u32, UserInfo)>>,
    charge_user: Mutex<Option<UserInfo>>,
    shutdown_states: Mutex<Vec<(Call, bool)>>,
}

/// 指定等级、带少量硬币的测试账号
pub fn sample_user(level: u8) -> UserInfo {
    UserInfo {
        mid: 10_086,
        uname: "测试账号".to_string(),
        level_info: LevelInfo {
            current_level: level,
            current_exp: 1_000,
            next_exp: Some(4_500),
        },
        money: 12.0,
        ..Default::default()
    }
}

impl Default for MockBili {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBili {
    pub fn new() -> Self {
        let user = sample_user(3);
        Self {
            calls: Mutex::new(Vec::new()),
            login: LoginBehavior::User(user.clone()),
            refresh: LoginBehavior::User(user),
            failing: HashSet::new(),
            daily_task_info: DailyTaskInfo::default(),
            exchange_succeeds: false,
            privilege_claimed: false,
            coin_balance: 12.0,
            watch_status: Mutex::new(None),
            manga_reward: Mutex::new(None),
            charge_user: Mutex::new(None),
            shutdown_states: Mutex::new(Vec::new()),
        }
    }

    /// 第一次登录调用的行为
    pub fn with_login(mut self, behavior: LoginBehavior) -> Self {
        self.login = behavior;
        self
    }

    /// 之后每次登录（刷新）调用的行为
    pub fn with_refresh(mut self, behavior: LoginBehavior) -> Self {
        self.refresh = behavior;
        self
    }

    pub fn with_user(self, user: UserInfo) -> Self {
        self.with_login(LoginBehavior::User(user.clone()))
            .with_refresh(LoginBehavior::User(user))
    }

    pub fn failing(mut self, call: Call) -> Self {
        self.failing.insert(call);
        self
    }

    pub fn with_daily_task_info(mut self, info: DailyTaskInfo) -> Self {
        self.daily_task_info = info;
        self
    }

    pub fn exchange_succeeds(mut self, succeeds: bool) -> Self {
        self.exchange_succeeds = succeeds;
        self
    }

    pub fn privilege_claimed(mut self, claimed: bool) -> Self {
        self.privilege_claimed = claimed;
        self
    }

    pub fn into_services(self) -> (Arc<Self>, Services) {
        let mock = Arc::new(self);
        let services = Services::from_single(mock.clone());
        (mock, services)
    }

    pub async fn calls(&self) -> Vec<Call> {
        self.calls.lock().await.clone()
    }

    pub async fn count(&self, call: Call) -> usize {
        self.calls.lock().await.iter().filter(|c| **c == call).count()
    }

    /// 最近一次观看/分享调用收到的任务状态
    pub async fn watch_status(&self) -> Option<Option<DailyTaskInfo>> {
        *self.watch_status.lock().await
    }

    pub async fn manga_reward(&self) -> Option<(u32, UserInfo)> {
        self.manga_reward.lock().await.clone()
    }

    pub async fn charge_user(&self) -> Option<UserInfo> {
        self.charge_user.lock().await.clone()
    }

    /// 每次调用收到的取消信号是否已触发
    pub async fn shutdown_states(&self) -> Vec<(Call, bool)> {
        self.shutdown_states.lock().await.clone()
    }

    async fn record(&self, call: Call, shutdown: &ShutdownSignal) -> Result<()> {
        self.shutdown_states
            .lock()
            .await
            .push((call, shutdown.is_shutdown()));
        self.calls.lock().await.push(call);
        if self.failing.contains(&call) {
            Err(anyhow!("mock failure: {:?}", call))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl AccountService for MockBili {
    async fn login_by_cookie(&self, shutdown: &ShutdownSignal) -> Result<Option<UserInfo>> {
        self.shutdown_states
            .lock()
            .await
            .push((Call::Login, shutdown.is_shutdown()));
        let first = {
            let mut calls = self.calls.lock().await;
            let first = !calls.contains(&Call::Login);
            calls.push(Call::Login);
            first
        };
        let behavior = if first { &self.login } else { &self.refresh };
        match behavior {
            LoginBehavior::User(user) => Ok(Some(user.clone())),
            LoginBehavior::NoUser => Ok(None),
            LoginBehavior::Fail => Err(anyhow!("mock failure: {:?}", Call::Login)),
        }
    }

    async fn daily_task_status(&self, shutdown: &ShutdownSignal) -> Result<DailyTaskInfo> {
        self.record(Call::DailyTaskStatus, shutdown).await?;
        Ok(self.daily_task_info)
    }
}

#[async_trait]
impl VideoService for MockBili {
    async fn watch_and_share(
        &self,
        status: Option<&DailyTaskInfo>,
        shutdown: &ShutdownSignal,
    ) -> Result<()> {
        *self.watch_status.lock().await = Some(status.copied());
        self.record(Call::WatchAndShare, shutdown).await
    }
}

#[async_trait]
impl DonateCoinService for MockBili {
    async fn add_coins_for_videos(&self, shutdown: &ShutdownSignal) -> Result<()> {
        self.record(Call::AddCoins, shutdown).await
    }
}

#[async_trait]
impl LiveService for MockBili {
    async fn live_sign(&self, shutdown: &ShutdownSignal) -> Result<()> {
        self.record(Call::LiveSign, shutdown).await
    }

    async fn exchange_silver_to_coin(&self, shutdown: &ShutdownSignal) -> Result<bool> {
        self.record(Call::ExchangeSilver, shutdown).await?;
        Ok(self.exchange_succeeds)
    }
}

#[async_trait]
impl CoinService for MockBili {
    async fn coin_balance(&self, shutdown: &ShutdownSignal) -> Result<f64> {
        self.record(Call::CoinBalance, shutdown).await?;
        Ok(self.coin_balance)
    }
}

#[async_trait]
impl MangaService for MockBili {
    async fn manga_sign(&self, shutdown: &ShutdownSignal) -> Result<()> {
        self.record(Call::MangaSign, shutdown).await
    }

    async fn manga_read(&self, shutdown: &ShutdownSignal) -> Result<()> {
        self.record(Call::MangaRead, shutdown).await
    }

    async fn receive_manga_vip_reward(
        &self,
        reason_id: u32,
        user: &UserInfo,
        shutdown: &ShutdownSignal,
    ) -> Result<()> {
        *self.manga_reward.lock().await = Some((reason_id, user.clone()));
        self.record(Call::MangaVipReward, shutdown).await
    }
}

#[async_trait]
impl VipPrivilegeService for MockBili {
    async fn receive_vip_privilege(
        &self,
        _user: &UserInfo,
        shutdown: &ShutdownSignal,
    ) -> Result<bool> {
        self.record(Call::VipPrivilege, shutdown).await?;
        Ok(self.privilege_claimed)
    }
}

#[async_trait]
impl ChargeService for MockBili {
    async fn charge(&self, user: &UserInfo, shutdown: &ShutdownSignal) -> Result<()> {
        *self.charge_user.lock().await = Some(user.clone());
        self.record(Call::Charge, shutdown).await
    }
}
