//! # shutdown
//!
//! Ctrl-C handling. The first signal asks the producer loop to stop after the
//! current batch; the second one means "now", even while a flush is stuck
//! waiting on the broker.

use std::future::Future;

use tokio::sync::watch;
use tracing::{info, warn};

/// Exit code for a process killed by SIGINT.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Wait for signals from `next_signal`. The first flips `shutdown` to `true`.
///
/// Returns `true` once a second signal arrives (the caller should exit
/// immediately), or `false` if the signal source fails.
pub async fn escalate_signals<F, Fut>(mut next_signal: F, shutdown: watch::Sender<bool>) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = next_signal().await {
        warn!(error = %e, "Cannot listen for Ctrl-C");
        return false;
    }
    info!("Ctrl-C received, stopping after the current batch (press again to exit now)");
    let _ = shutdown.send(true);

    match next_signal().await {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "Cannot listen for a second Ctrl-C");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Arc;

    use tokio::sync::Notify;

    use super::*;

    fn signal_source(notify: &Arc<Notify>) -> impl FnMut() -> std::pin::Pin<Box<dyn Future<Output = io::Result<()>> + Send>> {
        let notify = Arc::clone(notify);
        move || {
            let notify = Arc::clone(&notify);
            Box::pin(async move {
                notify.notified().await;
                Ok(())
            })
        }
    }

    #[tokio::test]
    async fn test_first_signal_requests_shutdown_second_forces_exit() {
        let notify = Arc::new(Notify::new());
        let (tx, mut rx) = watch::channel(false);

        let task = tokio::spawn(escalate_signals(signal_source(&notify), tx));

        notify.notify_one();
        rx.changed().await.unwrap();
        assert!(*rx.borrow());
        tokio::task::yield_now().await;
        assert!(!task.is_finished(), "one signal must not force an exit");

        notify.notify_one();
        assert!(task.await.unwrap());
    }

    #[tokio::test]
    async fn test_failed_signal_source_neither_stops_nor_exits() {
        let (tx, rx) = watch::channel(false);

        let forced = escalate_signals(
            || async { Err(io::Error::new(io::ErrorKind::Other, "no signal handler")) },
            tx,
        )
        .await;

        assert!(!forced);
        assert!(!*rx.borrow());
    }
}
