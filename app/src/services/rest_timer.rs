//! Rest countdown between sets
//!
//! A background task ticks once per second and publishes the remaining
//! time through a `watch` channel. Dropping the [`RestTimer`] stops it.

use std::time::Duration;
use tokio::sync::{oneshot, watch};
use tokio::time::{interval, MissedTickBehavior};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Running { remaining_secs: u32 },
    Finished,
    Skipped,
}

impl TimerState {
    pub fn is_done(&self) -> bool {
        !matches!(self, TimerState::Running { .. })
    }
}

pub struct RestTimer {
    state: watch::Receiver<TimerState>,
    skip: Option<oneshot::Sender<()>>,
}

impl RestTimer {
    /// Start counting down. Must be called inside a tokio runtime.
    pub fn start(duration_secs: u32) -> Self {
        let initial = if duration_secs == 0 {
            TimerState::Finished
        } else {
            TimerState::Running {
                remaining_secs: duration_secs,
            }
        };
        let (tx, rx) = watch::channel(initial);
        let (skip_tx, skip_rx) = oneshot::channel();
        if duration_secs > 0 {
            tokio::spawn(count_down(duration_secs, tx, skip_rx));
        }
        Self {
            state: rx,
            skip: Some(skip_tx),
        }
    }

    pub fn state(&self) -> TimerState {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.state.clone()
    }

    /// End the rest early
    pub fn skip(&mut self) {
        if let Some(skip) = self.skip.take() {
            let _ = skip.send(());
        }
    }

    /// Wait for the countdown to finish or be skipped
    pub async fn wait(&mut self) -> TimerState {
        loop {
            let state = *self.state.borrow_and_update();
            if state.is_done() {
                return state;
            }
            if self.state.changed().await.is_err() {
                return *self.state.borrow();
            }
        }
    }
}

async fn count_down(
    duration_secs: u32,
    tx: watch::Sender<TimerState>,
    mut skip: oneshot::Receiver<()>,
) {
    let mut ticker = interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately
    ticker.tick().await;

    let mut remaining = duration_secs;
    while remaining > 0 {
        tokio::select! {
            _ = ticker.tick() => {
                remaining -= 1;
                if remaining > 0 {
                    tx.send_replace(TimerState::Running { remaining_secs: remaining });
                }
            }
            _ = &mut skip => {
                debug!(remaining, "Rest skipped");
                tx.send_replace(TimerState::Skipped);
                return;
            }
        }
    }
    debug!(duration_secs, "Rest finished");
    tx.send_replace(TimerState::Finished);
}
