//! Active timer instances (runtime state)
//!
//! An `ActiveTimer` wraps one text element whose original content carries a
//! countdown directive. Instances live only until the next content rebuild;
//! state that must outlive them (the element's original text, the label's
//! start instant) belongs to the session.

use crate::expression::{RenderPolicy, TimeExpression};
use crate::surface::TextSurface;

/// One matched text element and its parsed directive.
#[derive(Debug, Clone)]
pub struct ActiveTimer<Id> {
    /// Backing text element, owned by the host document
    node: Id,

    /// Directive parsed from the element's original content
    expression: TimeExpression,

    /// Last whole-second elapsed value written to the element
    last_rendered: Option<u64>,
}

impl<Id> ActiveTimer<Id> {
    pub fn new(node: Id, expression: TimeExpression) -> Self {
        Self {
            node,
            expression,
            last_rendered: None,
        }
    }

    /// Label grouping this timer with others sharing its start time
    pub fn label(&self) -> &str {
        &self.expression.label
    }

    pub fn node(&self) -> &Id {
        &self.node
    }

    pub fn expression(&self) -> &TimeExpression {
        &self.expression
    }

    /// Push the display for `elapsed_secs` seconds of wall-clock time.
    ///
    /// Ticks arrive every ~100ms but the display has whole-second
    /// resolution, so the write is skipped entirely when the truncated
    /// value has not moved since the last update.
    pub fn update<S>(&mut self, surface: &mut S, policy: &RenderPolicy, elapsed_secs: f64)
    where
        S: TextSurface<Id = Id>,
    {
        let elapsed = elapsed_secs.max(0.0) as u64;
        if self.last_rendered == Some(elapsed) {
            return;
        }
        self.last_rendered = Some(elapsed);

        let display = policy.render(&self.expression, elapsed);
        surface.set_content(&self.node, &display.text);
        surface.set_color(&self.node, display.color.as_deref());
    }
}
