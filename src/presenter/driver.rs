//! Event-loop driver
//!
//! Bridges the two external signal sources (host surface notifications and
//! a fixed-period tick) into one presenter. Both arrive through a single
//! `select!` loop on one task, so handlers never overlap and timers update
//! in a deterministic order within each pass.

use std::time::{Duration, Instant};

use tokio::sync::mpsc::Receiver;
use tokio::time::MissedTickBehavior;

use crate::surface::TextSurface;

use super::{Presenter, PresenterSignal};

/// Display refresh period used when the config does not override it.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Notifications produced by host-specific detection logic (fullscreen
/// observation, document mutation observation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    PresentationBegan,
    PresentationEnded,
    ContentChanged,
}

/// Multiplexes [`SurfaceEvent`]s and the periodic tick into one presenter.
pub struct PresenterDriver {
    events: Receiver<SurfaceEvent>,
    tick_interval: Duration,
}

impl PresenterDriver {
    pub fn new(events: Receiver<SurfaceEvent>) -> Self {
        Self {
            events,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }

    pub fn with_tick_interval(events: Receiver<SurfaceEvent>, tick_interval: Duration) -> Self {
        Self {
            events,
            tick_interval,
        }
    }

    /// Run until the host drops its event sender.
    pub async fn run<S: TextSurface>(mut self, presenter: &mut Presenter<S>) {
        let mut ticker = tokio::time::interval(self.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                event = self.events.recv() => {
                    let Some(event) = event else { break };
                    self.dispatch(presenter, event);
                }
                _ = ticker.tick() => {
                    if presenter.is_active() {
                        presenter.handle_signal(&PresenterSignal::Tick {
                            timestamp: Instant::now(),
                        });
                    }
                }
            }
        }
    }

    fn dispatch<S: TextSurface>(&self, presenter: &mut Presenter<S>, event: SurfaceEvent) {
        let timestamp = Instant::now();

        match event {
            SurfaceEvent::PresentationBegan => {
                presenter.handle_signal(&PresenterSignal::PresentationBegan { timestamp });
                // Opening the presentation also reveals its first slide; the
                // host sends no separate content notification for it.
                presenter.handle_signal(&PresenterSignal::ContentChanged { timestamp });
            }
            SurfaceEvent::PresentationEnded => {
                presenter.handle_signal(&PresenterSignal::PresentationEnded { timestamp });
            }
            SurfaceEvent::ContentChanged => {
                presenter.handle_signal(&PresenterSignal::ContentChanged { timestamp });
            }
        }
    }
}
