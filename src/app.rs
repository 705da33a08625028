use crate::config::Config;
use crate::orchestrator::DailyTaskPipeline;
use crate::services::Services;
use crate::shutdown::ShutdownSignal;
use crate::utils::logging;
use crate::workflow::DailyTaskCtx;
use std::process::ExitCode;
use tracing::{error, info};

/// 应用主结构
///
/// 宿主程序注入能力服务，每次调度调用一次 [`App::run`]。
pub struct App {
    config: Config,
    pipeline: DailyTaskPipeline,
}

/// 一次运行的结果
#[derive(Debug)]
pub enum RunOutcome {
    /// 登录成功，其余任务均已尝试（部分失败也算正常完成）
    Completed(Box<DailyTaskCtx>),
    /// 流程在某个任务处终止
    Aborted { task: String, reason: String },
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Completed(_))
    }

    /// 映射为进程退出码：成功 0，终止 1
    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

impl App {
    /// 初始化日志并组装流水线
    pub fn initialize(config: Config, services: Services) -> Self {
        logging::init(&config.logging);
        Self::without_logging(config, services)
    }

    /// 组装流水线但不安装日志订阅器（由宿主自行配置日志时使用）
    pub fn without_logging(config: Config, services: Services) -> Self {
        let pipeline = DailyTaskPipeline::new(
            &services,
            config.daily_task.clone(),
            config.exp.clone(),
            config.locale,
        );
        Self { config, pipeline }
    }

    /// 运行一次每日任务
    pub async fn run(&self, shutdown: &ShutdownSignal) -> RunOutcome {
        let locale = self.config.locale;
        logging::log_run_started(locale);

        let outcome = match self.pipeline.run(shutdown).await {
            Ok(ctx) => RunOutcome::Completed(Box::new(ctx)),
            Err(e) => {
                let task = e.aborted_task().unwrap_or_default().to_string();
                error!("{}", locale.run_aborted(&task));
                RunOutcome::Aborted {
                    task,
                    reason: format!("{:#}", e),
                }
            }
        };

        logging::log_run_finished(locale);
        if outcome.is_success() {
            info!("{}", locale.run_completed());
        }
        outcome
    }
}
