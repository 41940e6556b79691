use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::views::{BoardView, Dispatcher};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy)]
pub struct Poller {
    interval: Duration,
}

impl Poller {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub async fn run<V: BoardView>(self, mut view: V, mut commands: mpsc::Receiver<V::Command>) -> V {
        let (completion_tx, mut completions) = mpsc::unbounded_channel();
        let mut dispatcher = Some(Dispatcher::new(completion_tx));
        let mut commands_open = true;

        let mut ticker = interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!("{} view polling every {:?}", view.name(), self.interval);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if view.reconcile() {
                        debug!("{} view picked up external changes", view.name());
                    }
                }
                command = commands.recv(), if commands_open => match command {
                    Some(command) => {
                        if let Some(dispatcher) = dispatcher.as_ref() {
                            if let Err(err) = view.handle(command, dispatcher) {
                                warn!("{} view rejected command: {}", view.name(), err);
                            }
                        }
                    }
                    None => {
                        debug!("{} view command channel closed", view.name());
                        commands_open = false;
                        dispatcher = None;
                    }
                },
                completion = completions.recv() => match completion {
                    Some(completion) => {
                        if let Err(err) = view.complete(completion) {
                            warn!("{} view failed to apply completion: {}", view.name(), err);
                        }
                    }
                    None => break,
                },
            }
        }

        info!("{} view stopped", view.name());
        view
    }
}
