use serde::{Deserialize, Serialize};

use super::TimeExpression;

/// What a timer writes back to its element on an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    /// Replacement text content
    pub text: String,

    /// Color override for the element; `None` means clear any override and
    /// fall back to the element's default color
    pub color: Option<String>,
}

/// How elapsed time at and past the limit is presented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum RenderPolicy {
    /// Freeze the display at `timeout_label` once the countdown reaches zero
    Clamped {
        /// Externally supplied (localized) timeout string
        timeout_label: String,
    },

    /// Keep counting past zero, flagging overtime via a color change
    Overtime {
        /// Color applied while the timer is past its limit
        overtime_color: String,
    },
}

impl Default for RenderPolicy {
    fn default() -> Self {
        Self::Overtime {
            overtime_color: "red".to_string(),
        }
    }
}

impl RenderPolicy {
    /// Compute the display for `expression` after `elapsed_secs` whole
    /// seconds.
    pub fn render(&self, expression: &TimeExpression, elapsed_secs: u64) -> DisplayState {
        let limit = expression.limit_secs;

        match self {
            Self::Clamped { timeout_label } => {
                if elapsed_secs >= limit {
                    DisplayState {
                        text: timeout_label.clone(),
                        color: None,
                    }
                } else {
                    DisplayState {
                        text: format_clock(limit - elapsed_secs),
                        color: None,
                    }
                }
            }
            Self::Overtime { overtime_color } => {
                let overtime = elapsed_secs > limit;

                DisplayState {
                    text: format_clock(limit.abs_diff(elapsed_secs)),
                    color: overtime.then(|| overtime_color.clone()),
                }
            }
        }
    }
}

/// Format seconds as zero-padded `MM:SS`. Seconds are modulo-60; minutes
/// keep their full digit count past 99.
fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
