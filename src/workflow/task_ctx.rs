//! 每日任务运行上下文
//!
//! 封装一次运行中在任务之间传递的数据

use crate::locale::Locale;
use crate::models::{DailyTaskInfo, UserInfo};
use crate::shutdown::ShutdownSignal;
use anyhow::{Context, Result};
use std::fmt::Display;

/// 一次运行的上下文，每次运行新建，运行结束即丢弃
#[derive(Debug, Clone)]
pub struct DailyTaskCtx {
    pub locale: Locale,
    pub shutdown: ShutdownSignal,

    /// 登录任务产生的账户快照
    pub user_info: Option<UserInfo>,

    /// 领取大会员福利后刷新得到的快照，不回写 `user_info`
    pub refreshed_user_info: Option<UserInfo>,

    /// 今日任务完成情况，查询失败时为 None
    pub daily_task_info: Option<DailyTaskInfo>,
}

impl DailyTaskCtx {
    pub fn new(locale: Locale, shutdown: ShutdownSignal) -> Self {
        Self {
            locale,
            shutdown,
            user_info: None,
            refreshed_user_info: None,
            daily_task_info: None,
        }
    }

    /// 登录快照，未登录时报错
    pub fn user(&self) -> Result<&UserInfo> {
        self.user_info.as_ref().context("尚未登录，缺少用户信息")
    }

    /// 最新的账户快照（刷新过则取刷新后的）
    pub fn latest_user(&self) -> Option<&UserInfo> {
        self.refreshed_user_info.as_ref().or(self.user_info.as_ref())
    }
}

impl Display for DailyTaskCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.latest_user() {
            Some(user) => write!(
                f,
                "[用户 {} LV{} 硬币#{}]",
                user.masked_uname(),
                user.level(),
                user.money
            ),
            None => write!(f, "[未登录]"),
        }
    }
}
