//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! app::App (配置、日志、退出码)
//!     ↓
//! orchestrator::DailyTaskPipeline (固定顺序的任务列表)
//!     ↓
//! workflow::intercept + workflow::tasks (单个任务的横幅、失败策略与分支)
//!     ↓
//! services (能力层：账户 / 视频 / 投币 / 直播 / 漫画 / 大会员 / 充电)
//! ```
//!
//! ## 设计原则
//!
//! 1. **顺序固定**：任务严格串行，前一个结束（成功或已处理的失败）才开始下一个
//! 2. **失败隔离**：只有登录失败会终止流程
//! 3. **无业务逻辑**：只做调度，具体判断在任务内，具体调用在能力层

pub mod daily_task_pipeline;

pub use daily_task_pipeline::DailyTaskPipeline;
