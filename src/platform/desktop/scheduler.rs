use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;
use tracing::debug;

/// Owned periodic timer. Ticks arrive on the receiver returned by [`ScheduledTask::start`];
/// stopping or dropping the handle cancels the timer and closes that receiver.
pub struct ScheduledTask {
    name: &'static str,
    join: Option<JoinHandle<()>>,
}

impl ScheduledTask {
    pub fn start(
        runtime: &Handle,
        name: &'static str,
        period: Duration,
    ) -> (Self, UnboundedReceiver<u64>) {
        let period = period.max(Duration::from_millis(1));
        let (tx, rx) = mpsc::unbounded_channel();

        let join = runtime.spawn(async move {
            let mut interval = tokio::time::interval(period);
            // first tick completes immediately
            interval.tick().await;
            let mut count = 0_u64;
            loop {
                interval.tick().await;
                count += 1;
                if tx.send(count).is_err() {
                    break;
                }
            }
        });
        debug!(name, ?period, "scheduled task started");

        (
            Self {
                name,
                join: Some(join),
            },
            rx,
        )
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_running(&self) -> bool {
        self.join
            .as_ref()
            .is_some_and(|join| !join.is_finished())
    }

    pub fn stop(&mut self) {
        if let Some(join) = self.join.take() {
            join.abort();
            debug!(name = self.name, "scheduled task stopped");
        }
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.stop();
    }
}
