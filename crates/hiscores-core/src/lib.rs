//! Data model for per-activity hiscores entries.
//!
//! A hiscores table reports each activity a player appears in as one
//! comma-separated row of `rank,score`, with `-1` standing in for "no
//! entry". This crate turns such rows into well-formed [`Activity`]
//! values and hides the sentinel behind `Option`-returning accessors.

pub mod activity;
pub mod error;

pub use activity::Activity;
pub use error::{Error, Result};
