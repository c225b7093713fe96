//! Presentation lifecycle
//!
//! The host environment detects fullscreen/presentation state and content
//! mutations; this module turns those notifications plus a periodic tick
//! into an explicit Idle/Active state machine around one session.

mod driver;
mod signal;
mod state;


pub use driver::{DEFAULT_TICK_INTERVAL, PresenterDriver, SurfaceEvent};
pub use signal::PresenterSignal;
pub use state::{Presenter, PresenterState};
