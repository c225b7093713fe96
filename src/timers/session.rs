//! Presentation session state
//!
//! One session spans one presentation activation. It owns the active timer
//! set, the label start-time monitors, and the original-content side table
//! keyed by node identity. Host elements are borrowed; the only thing ever
//! written to them is display state, so the cache lives here and not on
//! the elements themselves.

use std::time::Instant;

use hashbrown::HashMap;

use crate::config::AppConfig;
use crate::expression::{ExpressionParser, RenderPolicy};
use crate::surface::TextSurface;

use super::ActiveTimer;

/// Pure storage plus rebuild/tick logic for one presentation activation.
/// State transitions live in the presenter.
pub struct Session<S: TextSurface> {
    parser: ExpressionParser,
    policy: RenderPolicy,

    /// Active timers in node discovery order, rebuilt wholesale on content
    /// change
    timers: Vec<ActiveTimer<S::Id>>,

    /// Label → instant the label was first observed. First seen wins, so a
    /// countdown keeps running while its slide is hidden and re-shown.
    monitors: HashMap<String, Instant>,

    /// Node → content before the first rewrite. Rebuilds parse this, never
    /// the countdown digits a previous tick rendered into the element.
    originals: HashMap<S::Id, String>,
}

impl<S: TextSurface> Session<S> {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            parser: ExpressionParser::new(&config.pattern),
            policy: config.policy.clone(),
            timers: Vec::new(),
            monitors: HashMap::new(),
            originals: HashMap::new(),
        }
    }

    /// Number of matched timers from the last rebuild
    pub fn timer_count(&self) -> usize {
        self.timers.len()
    }

    /// Labels currently holding a start instant
    pub fn monitored_labels(&self) -> impl Iterator<Item = &str> {
        self.monitors.keys().map(String::as_str)
    }

    /// Start a fresh activation: all label start times are forgotten.
    pub fn begin(&mut self) {
        self.monitors.clear();
        self.timers.clear();
    }

    /// Tear down the activation. Observably equivalent to retaining state
    /// until the next `begin`, since `begin` clears it anyway.
    pub fn end(&mut self) {
        self.timers.clear();
        self.monitors.clear();
    }

    /// Rebuild the timer set from the currently visible nodes.
    ///
    /// Every visible node is classified from its original content; labels
    /// not yet monitored start counting at `now`; the display of every kept
    /// timer is pushed immediately rather than waiting for the next tick.
    pub fn rebuild(&mut self, surface: &mut S, now: Instant) {
        self.timers.clear();

        for node in surface.visible_nodes() {
            let original = match self.originals.get(&node) {
                Some(text) => text.clone(),
                None => match surface.content(&node) {
                    Some(text) => text,
                    None => continue,
                },
            };

            let Some(expression) = self.parser.parse(&original) else {
                continue;
            };

            self.originals.entry(node.clone()).or_insert(original);
            self.timers.push(ActiveTimer::new(node, expression));
        }

        for timer in &self.timers {
            self.monitors
                .entry(timer.label().to_string())
                .or_insert(now);
        }

        tracing::debug!(timers = self.timers.len(), "rebuilt timer set");

        self.tick(surface, now);
    }

    /// Push the current elapsed time into every active timer.
    pub fn tick(&mut self, surface: &mut S, now: Instant) {
        for timer in &mut self.timers {
            let Some(&start) = self.monitors.get(timer.label()) else {
                // Every kept label is seeded in the same rebuild; reaching
                // this is a bug, not a recoverable condition.
                tracing::warn!(label = timer.label(), "timer label has no monitor");
                continue;
            };

            let elapsed = now.saturating_duration_since(start).as_secs_f64();
            timer.update(surface, &self.policy, elapsed);
        }
    }
}
