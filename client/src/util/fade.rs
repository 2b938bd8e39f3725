//! Cross-fade decoration for mutually exclusive view panes.
//!
//! An entering pane plays `haven-fade-in`. A leaving pane stays mounted with
//! `haven-fade-out` for `FADE_MS` and is then removed. The state change itself
//! is immediate; nothing waits for either animation.

#[cfg(test)]
#[path = "fade_test.rs"]
mod fade_test;

use std::time::Duration;

/// Duration of the pane fade.
pub const FADE_MS: u32 = 300;

/// Class of a pane that is fading in; keyframes live in the app stylesheet.
pub const FADE_IN_CLASS: &str = "haven-fade-in";

/// Class of a pane that is fading out before removal.
pub const FADE_OUT_CLASS: &str = "haven-fade-out";

/// How long a leaving pane stays mounted.
#[must_use]
pub fn fade_duration() -> Duration {
    Duration::from_millis(u64::from(FADE_MS))
}

/// Inline custom property the fade classes read their duration from.
#[must_use]
pub fn fade_vars(duration_ms: u32) -> String {
    format!("--haven-fade-ms: {duration_ms}ms;")
}

/// BEM class for a pane keyed by its phase name.
#[must_use]
pub fn pane_class(block: &str, phase: &str) -> String {
    format!("{block}__pane {block}__pane--{phase}")
}
