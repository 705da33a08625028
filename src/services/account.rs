use crate::models::{DailyTaskInfo, UserInfo};
use crate::shutdown::ShutdownSignal;
use anyhow::Result;
use async_trait::async_trait;

/// 账户能力
#[async_trait]
pub trait AccountService: Send + Sync {
    /// 使用已保存的 Cookie 登录，Cookie 失效时返回 `None`
    async fn login_by_cookie(&self, shutdown: &ShutdownSignal) -> Result<Option<UserInfo>>;

    /// 查询今日任务完成情况
    async fn daily_task_status(&self, shutdown: &ShutdownSignal) -> Result<DailyTaskInfo>;
}
