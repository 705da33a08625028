use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 任务失败且策略要求中止整个流程
    #[error("任务【{task}】失败，流程终止: {source:#}")]
    TaskAborted {
        task: String,
        #[source]
        source: anyhow::Error,
    },
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

impl AppError {
    /// 创建任务中止错误
    pub fn task_aborted(task: impl Into<String>, source: anyhow::Error) -> Self {
        AppError::TaskAborted {
            task: task.into(),
            source,
        }
    }

    /// 最内层中止流程的任务名（非任务错误返回 None）
    pub fn aborted_task(&self) -> Option<&str> {
        match self {
            AppError::TaskAborted { task, source } => match source.downcast_ref::<AppError>() {
                Some(inner @ AppError::TaskAborted { .. }) => inner.aborted_task(),
                _ => Some(task),
            },
            AppError::Config(_) => None,
        }
    }
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: &'static str,
    },
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
