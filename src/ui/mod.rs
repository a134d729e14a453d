//! UI helpers for consistent CLI output
//!
//! Uses `cliclack` log lines on interactive terminals and plain tagged
//! lines (`[OK]`, `[WARN]`, ...) everywhere else, so scripted callers and
//! tests see stable text.

mod context;
mod output;

pub use context::UiContext;
pub use output::{intro, key_value, section, step_info, step_ok, step_ok_detail, step_warn_hint};
