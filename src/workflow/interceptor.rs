//! 任务拦截器
//!
//! 每个任务统一套上"开始横幅 → 执行 → 结束横幅 / 记录失败"的外壳，
//! 失败后按 [`FailurePolicy`] 决定中止流程还是继续。

use crate::error::{AppError, AppResult};
use crate::locale::Locale;
use crate::utils::logging::{log_task_end, log_task_start, TaskLevel};
use futures::FutureExt;
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use tracing::{error, warn};

/// 任务失败后的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// 向上抛出，终止整个流程
    Rethrow,
    /// 记录后吞掉，继续下一个任务
    Suppress,
}

/// 任务横幅信息
#[derive(Debug, Clone, Copy)]
pub struct TaskBanner<'a> {
    /// 稳定的任务标识，用于结构化日志字段
    pub id: &'a str,
    /// 展示名，None 时不输出横幅
    pub name: Option<&'a str>,
    pub level: TaskLevel,
}

impl<'a> TaskBanner<'a> {
    pub fn new(id: &'a str, name: Option<&'a str>, level: TaskLevel) -> Self {
        Self { id, name, level }
    }

    fn label(&self) -> &'a str {
        self.name.unwrap_or(self.id)
    }
}

/// 执行一个任务体并套上统一的日志与异常处理
///
/// 成功返回 `Ok(Some(value))`；失败且策略为 `Suppress` 时返回 `Ok(None)`；
/// 失败且策略为 `Rethrow` 时返回 [`AppError::TaskAborted`]。
/// 任务体内的 panic 同样按失败处理。
pub async fn intercept<T, E, Fut>(
    banner: TaskBanner<'_>,
    policy: FailurePolicy,
    locale: Locale,
    body: Fut,
) -> AppResult<Option<T>>
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<anyhow::Error>,
{
    if let Some(name) = banner.name {
        log_task_start(banner.level, &locale.task_started(name));
    }

    let outcome = match AssertUnwindSafe(body).catch_unwind().await {
        Ok(result) => result.map_err(Into::into),
        Err(payload) => Err(anyhow::anyhow!("任务发生 panic: {}", panic_message(&*payload))),
    };

    match outcome {
        Ok(value) => {
            if let Some(name) = banner.name {
                log_task_end(banner.level, &locale.task_completed(name));
            }
            Ok(Some(value))
        }
        Err(err) => {
            let label = banner.label();
            error!(
                task = banner.id,
                "{}",
                locale.task_failed(label, &format!("{:#}", err))
            );
            match policy {
                FailurePolicy::Rethrow => {
                    // 内层任务已经记录过终止
                    let already_aborted = matches!(
                        err.downcast_ref::<AppError>(),
                        Some(AppError::TaskAborted { .. })
                    );
                    if !already_aborted {
                        error!(task = banner.id, "{}", locale.abort_after_failure());
                    }
                    Err(AppError::task_aborted(label, err))
                }
                FailurePolicy::Suppress => {
                    warn!(task = banner.id, "{}", locale.continue_after_failure());
                    Ok(None)
                }
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "未知 panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::logs::LogCapture;
    use tokio_test::{assert_err, assert_ok};

    fn banner(name: Option<&str>) -> TaskBanner<'_> {
        TaskBanner::new("test_task", name, TaskLevel::Two)
    }

    #[tokio::test]
    async fn success_returns_value_and_logs_banners() {
        let capture = LogCapture::new();
        let _guard = capture.set_default();

        let result = intercept(
            banner(Some("直播签到")),
            FailurePolicy::Suppress,
            Locale::ZhCn,
            async { Ok::<_, anyhow::Error>(42) },
        )
        .await;

        assert_eq!(assert_ok!(result), Some(42));
        let logs = capture.contents();
        assert!(logs.contains("开始【直播签到】"), "日志: {}", logs);
        assert!(logs.contains("【直播签到】结束"), "日志: {}", logs);
    }

    #[tokio::test]
    async fn suppressed_failure_continues() {
        let capture = LogCapture::new();
        let _guard = capture.set_default();

        let result = intercept(
            banner(Some("漫画签到")),
            FailurePolicy::Suppress,
            Locale::ZhCn,
            async { Err::<(), _>(anyhow::anyhow!("网络超时")) },
        )
        .await;

        assert_eq!(assert_ok!(result), None);
        let logs = capture.contents();
        assert!(logs.contains("【漫画签到】失败，失败信息: 网络超时"), "日志: {}", logs);
        assert!(logs.contains("继续执行其他任务"), "日志: {}", logs);
    }

    #[tokio::test]
    async fn rethrown_failure_carries_task_name() {
        let result = intercept(
            banner(Some("登录")),
            FailurePolicy::Rethrow,
            Locale::ZhCn,
            async { Err::<(), _>(anyhow::anyhow!("Cookie 失效")) },
        )
        .await;

        let err = assert_err!(result);
        assert_eq!(err.aborted_task(), Some("登录"));
        assert!(err.to_string().contains("Cookie 失效"));
    }

    #[tokio::test]
    async fn nested_abort_is_logged_once() {
        let capture = LogCapture::new();
        let _guard = capture.set_default();

        let inner = intercept(
            banner(Some("登录")),
            FailurePolicy::Rethrow,
            Locale::ZhCn,
            async { Err::<(), _>(anyhow::anyhow!("Cookie 失效")) },
        );
        let result = intercept(
            TaskBanner::new("daily_task", Some("每日任务"), TaskLevel::One),
            FailurePolicy::Rethrow,
            Locale::ZhCn,
            async { inner.await.map(|_| ()) },
        )
        .await;

        let err = assert_err!(result);
        assert_eq!(err.aborted_task(), Some("登录"));
        let logs = capture.contents();
        assert_eq!(logs.matches("终止后续任务").count(), 1, "日志: {}", logs);
    }

    #[tokio::test]
    async fn unnamed_task_logs_no_banner() {
        let capture = LogCapture::new();
        let _guard = capture.set_default();

        let result = intercept(
            banner(None),
            FailurePolicy::Suppress,
            Locale::ZhCn,
            async { Ok::<_, anyhow::Error>(()) },
        )
        .await;

        assert_ok!(result);
        let logs = capture.contents();
        assert!(!logs.contains("开始"), "日志: {}", logs);
    }

    #[tokio::test]
    async fn unnamed_task_failure_uses_id() {
        let capture = LogCapture::new();
        let _guard = capture.set_default();

        let result = intercept(
            banner(None),
            FailurePolicy::Suppress,
            Locale::EnUs,
            async { Err::<(), _>(anyhow::anyhow!("boom")) },
        )
        .await;

        assert_eq!(assert_ok!(result), None);
        assert!(capture.contents().contains("[test_task] failed: boom"));
    }

    #[tokio::test]
    async fn panic_is_treated_as_failure() {
        let result = intercept(
            banner(Some("投币")),
            FailurePolicy::Suppress,
            Locale::ZhCn,
            async {
                if true {
                    panic!("硬币不足");
                }
                Ok::<(), anyhow::Error>(())
            },
        )
        .await;

        assert_eq!(assert_ok!(result), None);
    }
}
