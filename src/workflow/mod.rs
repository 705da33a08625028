pub mod interceptor;
pub mod task;
pub mod task_ctx;
pub mod tasks;

pub use interceptor::{intercept, FailurePolicy, TaskBanner};
pub use task::DailyTask;
pub use task_ctx::DailyTaskCtx;
