//! Domain types and invariant logic shared by the readstack crates.

pub mod error;
pub mod progress;
pub mod types;
pub mod uploads;
