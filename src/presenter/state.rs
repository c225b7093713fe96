//! Presenter state machine
//!
//! Two states, four signals. Out-of-state signals are tolerated no-ops: the
//! driver is expected to gate them, but delivery races around presentation
//! startup and teardown are normal and must not crash anything.

use crate::config::AppConfig;
use crate::surface::TextSurface;
use crate::timers::Session;

use super::PresenterSignal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresenterState {
    /// No active presentation
    #[default]
    Idle,

    /// Presentation in progress, timers live
    Active,
}

/// Owns the session and the host surface; reacts to [`PresenterSignal`]s.
pub struct Presenter<S: TextSurface> {
    state: PresenterState,
    session: Session<S>,
    surface: S,
}

impl<S: TextSurface> Presenter<S> {
    pub fn new(surface: S, config: &AppConfig) -> Self {
        Self {
            state: PresenterState::Idle,
            session: Session::new(config),
            surface,
        }
    }

    pub fn state(&self) -> PresenterState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == PresenterState::Active
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn handle_signal(&mut self, signal: &PresenterSignal) {
        match (self.state, signal) {
            (PresenterState::Idle, PresenterSignal::PresentationBegan { .. }) => {
                tracing::debug!("presentation began");
                self.session.begin();
                self.state = PresenterState::Active;
            }
            (PresenterState::Active, PresenterSignal::ContentChanged { timestamp }) => {
                self.session.rebuild(&mut self.surface, *timestamp);
            }
            (PresenterState::Active, PresenterSignal::Tick { timestamp }) => {
                self.session.tick(&mut self.surface, *timestamp);
            }
            (PresenterState::Active, PresenterSignal::PresentationEnded { .. }) => {
                tracing::debug!("presentation ended");
                self.session.end();
                self.state = PresenterState::Idle;
            }
            (state, signal) => {
                tracing::debug!(?state, ?signal, "signal ignored in current state");
            }
        }
    }

    /// Handle a batch of signals in order (driver convenience).
    pub fn handle_signals(&mut self, signals: &[PresenterSignal]) {
        for signal in signals {
            self.handle_signal(signal);
        }
    }
}
