pub mod config;
pub mod expression;
pub mod presenter;
pub mod surface;
pub mod timers;

// Re-exports for convenience
pub use config::{AppConfig, ConfigError, PatternConfig};
pub use expression::{DisplayState, ExpressionParser, RenderPolicy, TimeExpression};
pub use presenter::{Presenter, PresenterDriver, PresenterSignal, PresenterState, SurfaceEvent};
pub use surface::{MemorySurface, TextSurface};
pub use timers::{ActiveTimer, Session};
