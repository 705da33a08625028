//! # Bili Daily Task
//!
//! 按固定顺序执行每日任务（登录、观看分享视频、投币、直播签到、漫画签到与阅读、
//! 银瓜子兑换、大会员福利、充电），并以配置的语言输出进度日志。
//!
//! ## 架构设计
//!
//! ### ① 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，由宿主程序实现并注入
//! - `AccountService` / `VideoService` / `LiveService` / `MangaService` 等
//!
//! ### ② 流程层（Workflow）
//! - `workflow/interceptor` - 统一的横幅日志与失败策略
//! - `workflow/tasks` - 每个任务的分支判断（跳过条件、兑换后查余额、领取后刷新）
//! - `DailyTaskCtx` - 在任务之间传递的用户快照与任务状态
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/daily_task_pipeline` - 固定顺序的任务列表，逐个执行
//!
//! ### ④ 宿主入口
//! - `app::App` - 配置、日志初始化、运行结果与退出码
//!
//! ## 模块结构

pub mod app;
pub mod config;
pub mod error;
pub mod locale;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod shutdown;
pub mod testing;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::{App, RunOutcome};
pub use config::{Config, DailyTaskOptions};
pub use error::{AppError, AppResult, ConfigError};
pub use locale::Locale;
pub use models::{DailyTaskInfo, ExpDictionary, UserInfo};
pub use orchestrator::DailyTaskPipeline;
pub use services::Services;
pub use shutdown::ShutdownSignal;
pub use workflow::{DailyTask, DailyTaskCtx, FailurePolicy};
