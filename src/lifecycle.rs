//! Lifecycle wrapper around the serve loop.
//!
//! The application instance moves through an ordered state machine:
//!
//! ```text
//! NotStarted --(run)--> Running --(termination signal)--> ShuttingDown
//!     --(in-flight requests drained)--> Stopped
//! ```
//!
//! No transition skips a state, and the shutdown log line always precedes
//! `Stopped`. A termination signal is observed and logged, never swallowed:
//! it resolves the graceful-shutdown future, the listener stops accepting,
//! in-flight requests drain, and `run` returns so the host runtime's own
//! teardown proceeds.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;

/// Phase of the application instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LifecycleState {
    NotStarted = 0,
    Running = 1,
    ShuttingDown = 2,
    Stopped = 3,
}

impl LifecycleState {
    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::NotStarted,
            1 => Self::Running,
            2 => Self::ShuttingDown,
            _ => Self::Stopped,
        }
    }
}

/// Shutdown coordinator and state tracker for one application instance.
///
/// Holds a broadcast channel so shutdown can be requested in-process (tests,
/// admin paths) as well as by OS signals.
pub struct Lifecycle {
    state: AtomicU8,
    shutdown_tx: broadcast::Sender<()>,
}

impl Lifecycle {
    pub fn new() -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);
        Self {
            state: AtomicU8::new(LifecycleState::NotStarted as u8),
            shutdown_tx,
        }
    }

    /// Current lifecycle phase.
    pub fn state(&self) -> LifecycleState {
        LifecycleState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Request shutdown from inside the process, equivalent to a signal.
    pub fn trigger_shutdown(&self) {
        let _ = self.shutdown_tx.send(());
    }

    fn subscribe(&self) -> broadcast::Receiver<()> {
        self.shutdown_tx.subscribe()
    }

    /// Ordered transition; anything else is a bug worth a warning, not a panic.
    fn advance(&self, from: LifecycleState, to: LifecycleState) {
        match self
            .state
            .compare_exchange(from as u8, to as u8, Ordering::AcqRel, Ordering::Acquire)
        {
            Ok(_) => tracing::debug!("lifecycle: {:?} -> {:?}", from, to),
            Err(actual) => tracing::warn!(
                "lifecycle: refused transition {:?} -> {:?} (currently {:?})",
                from,
                to,
                LifecycleState::from_u8(actual)
            ),
        }
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

/// Serve `app` on `listener` inside the lifecycle wrapper.
///
/// Logs before accepting traffic and again after the listener has stopped and
/// in-flight requests have drained. Returns when shutdown completes or the
/// serve loop fails.
pub async fn run(
    listener: TcpListener,
    app: Router,
    lifecycle: Arc<Lifecycle>,
) -> std::io::Result<()> {
    // Subscribe before the state flips to Running so a trigger fired right
    // after startup is never lost.
    let trigger = lifecycle.subscribe();

    tracing::info!("Starting Backend API...");
    lifecycle.advance(LifecycleState::NotStarted, LifecycleState::Running);

    let observer = lifecycle.clone();
    let shutdown = async move {
        wait_for_shutdown(trigger).await;
        tracing::info!("Application shutdown requested");
        observer.advance(LifecycleState::Running, LifecycleState::ShuttingDown);
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    // Reached only after drain completes.
    tracing::info!("Shutting down Backend API...");
    lifecycle.advance(LifecycleState::ShuttingDown, LifecycleState::Stopped);
    Ok(())
}

/// Resolve on SIGINT, SIGTERM (unix), or an in-process trigger.
async fn wait_for_shutdown(mut trigger: broadcast::Receiver<()>) {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install SIGINT handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
        _ = trigger.recv() => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_not_started() {
        assert_eq!(Lifecycle::new().state(), LifecycleState::NotStarted);
    }

    #[test]
    fn transitions_are_ordered() {
        let lc = Lifecycle::new();
        lc.advance(LifecycleState::NotStarted, LifecycleState::Running);
        assert_eq!(lc.state(), LifecycleState::Running);

        // Skipping Running -> Stopped is refused.
        lc.advance(LifecycleState::NotStarted, LifecycleState::Stopped);
        assert_eq!(lc.state(), LifecycleState::Running);

        lc.advance(LifecycleState::Running, LifecycleState::ShuttingDown);
        lc.advance(LifecycleState::ShuttingDown, LifecycleState::Stopped);
        assert_eq!(lc.state(), LifecycleState::Stopped);
    }
}
