//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `check.rs` — term presence checks against manifest and disk.
//! - `maintain.rs` — manifest rebuild and filename normalization.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate the actual work to `services/*`.
//! - Keep behavior and output schema stable.

pub mod check;
pub mod maintain;

pub use check::handle_check;
pub use maintain::{handle_rebuild, handle_rename};
