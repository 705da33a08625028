//! 取消信号
//!
//! 流水线本身不做超时或取消判断，只把信号原样转交给各个能力服务。

use tokio::sync::watch;

/// 只读的取消信号
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
}

/// 发出取消信号的一端
#[derive(Debug)]
pub struct ShutdownTrigger {
    tx: watch::Sender<bool>,
}

/// 创建一对取消信号
pub fn channel() -> (ShutdownTrigger, ShutdownSignal) {
    let (tx, rx) = watch::channel(false);
    (ShutdownTrigger { tx }, ShutdownSignal { rx })
}

impl ShutdownTrigger {
    pub fn trigger(&self) {
        // 所有接收端都已释放时发送失败，此时无人关心取消
        let _ = self.tx.send(true);
    }
}

impl ShutdownSignal {
    /// 永远不会触发的信号
    pub fn never() -> Self {
        let (tx, rx) = watch::channel(false);
        // 发送端释放后 changed() 会返回错误，is_shutdown() 仍为 false
        drop(tx);
        Self { rx }
    }

    pub fn is_shutdown(&self) -> bool {
        *self.rx.borrow()
    }

    /// 等待取消；发送端已释放且未取消时永久挂起
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        if rx.wait_for(|v| *v).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

/// 按下 Ctrl-C 时触发的取消信号
///
/// 内部会 `tokio::spawn` 监听任务，必须在 Tokio 运行时内调用，否则会 panic。
pub fn on_ctrl_c() -> ShutdownSignal {
    let (trigger, signal) = channel();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("监听 Ctrl-C 失败: {}", e);
            return;
        }
        tracing::warn!("收到 Ctrl-C，通知各任务取消");
        trigger.trigger();
    });
    signal
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn trigger_is_observed() {
        let (trigger, signal) = channel();
        assert!(!signal.is_shutdown());
        trigger.trigger();
        assert!(signal.is_shutdown());
        tokio::time::timeout(Duration::from_secs(1), signal.cancelled())
            .await
            .expect("取消信号应立即完成");
    }

    #[tokio::test]
    async fn never_signal_stays_pending() {
        let signal = ShutdownSignal::never();
        assert!(!signal.is_shutdown());
        let waited = tokio::time::timeout(Duration::from_millis(20), signal.cancelled()).await;
        assert!(waited.is_err());
    }
}
