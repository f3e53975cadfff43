//! Runs a `TypingAnimator` on a tokio task
//!
//! The task sleeps until the animator's next deadline, advances it, and
//! publishes the text over a watch channel. Dropping the driver aborts the
//! task, which cancels the pending timer.

use super::{caret_opacity, TypingAnimator};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// What the renderer needs from a running animator
#[derive(Debug, Clone, PartialEq)]
pub struct TypingSnapshot {
    pub text: String,
    pub mounted_at: Instant,
}

impl TypingSnapshot {
    pub fn caret_opacity(&self, now: Instant) -> f32 {
        caret_opacity(self.mounted_at, now)
    }

    pub fn caret_visible(&self, now: Instant) -> bool {
        self.caret_opacity(now) >= 0.5
    }
}

pub struct TypingDriver {
    rx: watch::Receiver<TypingSnapshot>,
    task: JoinHandle<()>,
}

impl TypingDriver {
    /// Mount the animator now and start ticking it in the background
    pub fn spawn(mut animator: TypingAnimator) -> Self {
        let now = Instant::now();
        animator.mount(now);
        let mounted_at = animator.mounted_at().unwrap_or(now);

        let (tx, rx) = watch::channel(TypingSnapshot {
            text: animator.display().to_string(),
            mounted_at,
        });

        let task = tokio::spawn(async move {
            while let Some(deadline) = animator.next_tick() {
                tokio::time::sleep_until(deadline).await;
                if !animator.advance(Instant::now()) {
                    continue;
                }
                let snapshot = TypingSnapshot {
                    text: animator.display().to_string(),
                    mounted_at,
                };
                if tx.send(snapshot).is_err() {
                    break;
                }
            }
            tracing::debug!("typing driver stopped");
        });

        Self { rx, task }
    }

    pub fn snapshot(&self) -> TypingSnapshot {
        self.rx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<TypingSnapshot> {
        self.rx.clone()
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for TypingDriver {
    fn drop(&mut self) {
        self.task.abort();
    }
}
