//! 每日任务流水线 - 编排层
//!
//! ## 职责
//!
//! 按固定顺序逐个执行任务，每个任务都经过拦截器：
//! 只有登录失败会终止流程，其余任务失败后记录日志并继续。

use crate::config::DailyTaskOptions;
use crate::error::AppResult;
use crate::locale::{Locale, TaskName};
use crate::models::ExpDictionary;
use crate::services::Services;
use crate::shutdown::ShutdownSignal;
use crate::utils::logging::TaskLevel;
use crate::workflow::tasks::{
    AddCoinsForVideo, Charge, ExchangeSilverToCoin, FetchDailyTaskStatus, LiveSign, Login,
    MangaRead, MangaSign, ReceiveMangaVipReward, ReceiveVipPrivilege, WatchAndShareVideo,
};
use crate::workflow::{intercept, DailyTask, DailyTaskCtx, FailurePolicy, TaskBanner};

/// 每日任务流水线
pub struct DailyTaskPipeline {
    tasks: Vec<Box<dyn DailyTask>>,
    locale: Locale,
}

impl DailyTaskPipeline {
    /// 按固定顺序组装全部任务
    pub fn new(
        services: &Services,
        options: DailyTaskOptions,
        exp: ExpDictionary,
        locale: Locale,
    ) -> Self {
        let tasks: Vec<Box<dyn DailyTask>> = vec![
            // 每日任务赚经验
            Box::new(Login::new(services.account.clone(), exp)),
            Box::new(FetchDailyTaskStatus::new(services.account.clone())),
            Box::new(WatchAndShareVideo::new(
                services.video.clone(),
                options.clone(),
            )),
            Box::new(AddCoinsForVideo::new(services.donate_coin.clone(), options)),
            // 签到
            Box::new(LiveSign::new(services.live.clone())),
            Box::new(MangaSign::new(services.manga.clone())),
            Box::new(MangaRead::new(services.manga.clone())),
            Box::new(ExchangeSilverToCoin::new(
                services.live.clone(),
                services.coin.clone(),
            )),
            // 领福利
            Box::new(ReceiveVipPrivilege::new(
                services.vip_privilege.clone(),
                services.account.clone(),
            )),
            Box::new(ReceiveMangaVipReward::new(services.manga.clone())),
            Box::new(Charge::new(services.charge.clone())),
        ];
        Self::with_tasks(tasks, locale)
    }

    /// 使用自定义任务列表
    pub fn with_tasks(tasks: Vec<Box<dyn DailyTask>>, locale: Locale) -> Self {
        Self { tasks, locale }
    }

    /// 任务标识，按执行顺序
    pub fn task_ids(&self) -> Vec<&'static str> {
        self.tasks.iter().map(|t| t.id()).collect()
    }

    /// 执行一次全部任务
    ///
    /// 返回本次运行的上下文；登录失败时返回 [`crate::AppError::TaskAborted`]。
    pub async fn run(&self, shutdown: &ShutdownSignal) -> AppResult<DailyTaskCtx> {
        let mut ctx = DailyTaskCtx::new(self.locale, shutdown.clone());
        let banner = TaskBanner::new(
            "daily_task",
            Some(TaskName::DailyTask.display(self.locale)),
            TaskLevel::One,
        );

        intercept(
            banner,
            FailurePolicy::Rethrow,
            self.locale,
            self.run_tasks(&mut ctx),
        )
        .await?;

        Ok(ctx)
    }

    async fn run_tasks(&self, ctx: &mut DailyTaskCtx) -> AppResult<()> {
        for task in &self.tasks {
            let banner = TaskBanner::new(
                task.id(),
                task.name().map(|n| n.display(self.locale)),
                TaskLevel::Two,
            );
            intercept(banner, task.policy(), self.locale, task.run(ctx)).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::mocks::MockBili;
    use std::sync::Arc;

    #[test]
    fn tasks_are_assembled_in_fixed_order() {
        let services = Services::from_single(Arc::new(MockBili::new()));
        let pipeline = DailyTaskPipeline::new(
            &services,
            DailyTaskOptions::default(),
            ExpDictionary::default(),
            Locale::ZhCn,
        );

        assert_eq!(
            pipeline.task_ids(),
            vec![
                "login",
                "daily_task_status",
                "watch_and_share_video",
                "add_coins_for_video",
                "live_sign",
                "manga_sign",
                "manga_read",
                "exchange_silver_to_coin",
                "receive_vip_privilege",
                "receive_manga_vip_reward",
                "charge",
            ]
        );
    }
}
