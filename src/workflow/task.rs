use crate::locale::TaskName;
use crate::workflow::interceptor::FailurePolicy;
use crate::workflow::task_ctx::DailyTaskCtx;
use anyhow::Result;
use async_trait::async_trait;

/// 流水线中的一个任务
///
/// 任务本身只描述"做什么"，日志横幅和失败处理由拦截器统一完成。
#[async_trait]
pub trait DailyTask: Send + Sync {
    /// 稳定的任务标识
    fn id(&self) -> &'static str;

    /// 展示名，None 表示不输出横幅
    fn name(&self) -> Option<TaskName>;

    /// 失败处理策略，默认记录后继续
    fn policy(&self) -> FailurePolicy {
        FailurePolicy::Suppress
    }

    async fn run(&self, ctx: &mut DailyTaskCtx) -> Result<()>;
}
