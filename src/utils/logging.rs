//! 日志工具模块
//!
//! 提供日志初始化以及任务横幅的输出

use crate::config::{LogFormat, LoggingOptions};
use crate::locale::Locale;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 任务横幅的层级
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskLevel {
    /// 整个流程
    One,
    /// 单个任务
    Two,
}

impl TaskLevel {
    fn rule(self) -> String {
        match self {
            TaskLevel::One => "=".repeat(20),
            TaskLevel::Two => "-".repeat(5),
        }
    }
}

/// 初始化全局日志订阅器
///
/// # 参数
/// - `options`: 日志级别与输出格式
///
/// `RUST_LOG` 存在时覆盖配置中的级别；重复初始化会被忽略。
pub fn init(options: &LoggingOptions) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&options.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let result = match options.format {
        LogFormat::Full => builder.try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    if result.is_err() {
        tracing::debug!("日志订阅器已初始化，跳过");
    }
}

/// 记录任务开始横幅
///
/// # 参数
/// - `level`: 横幅层级，`One` 为三行重横幅，`Two` 为单行轻横幅
/// - `text`: 横幅文本
pub fn log_task_start(level: TaskLevel, text: &str) {
    match level {
        TaskLevel::One => {
            info!("{}", level.rule());
            info!("{}", text);
            info!("{}", level.rule());
        }
        TaskLevel::Two => {
            let rule = level.rule();
            info!("{}{}{}", rule, text, rule);
        }
    }
}

/// 记录任务结束横幅
///
/// # 参数
/// - `level`: 横幅层级
/// - `text`: 横幅文本
pub fn log_task_end(level: TaskLevel, text: &str) {
    match level {
        TaskLevel::One => {
            info!("{}", level.rule());
            info!("{}", text);
            info!("{}\n", level.rule());
        }
        TaskLevel::Two => {
            let rule = level.rule();
            info!("{}{}{}\n", rule, text, rule);
        }
    }
}

/// 记录运行开始时间
///
/// # 参数
/// - `locale`: 日志语言
pub fn log_run_started(locale: Locale) {
    info!(
        "{}",
        locale.run_started_at(&chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string())
    );
}

/// 记录运行完成时间
pub fn log_run_finished(locale: Locale) {
    info!(
        "{}",
        locale.run_finished_at(&chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string())
    );
}
