//! Reading-progress invariant logic.
//!
//! A book's `progress` and `completed` columns are never written
//! independently: `completed` must equal `progress == 100` at all times.
//! Every write path goes through [`ProgressState`] so both values are
//! computed together and persisted in a single UPDATE.

use serde::Serialize;

/// The reconciled pair of mutable reading-state fields on a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressState {
    /// Percentage read, always within `[0, 100]`.
    pub progress: i32,
    /// Derived flag: true iff `progress == 100`.
    pub completed: bool,
}

impl ProgressState {
    /// Build the state from a raw progress value, clamping to `[0, 100]`.
    ///
    /// Values below 0 floor to 0; values above 100 ceiling to 100.
    /// `completed` follows from the clamped value.
    pub fn from_progress(raw: i32) -> Self {
        let progress = raw.clamp(0, 100);
        Self {
            progress,
            completed: progress >= 100,
        }
    }

    /// Build the state from a completion toggle.
    ///
    /// Marking a book complete forces `progress = 100`; un-completing it
    /// resets `progress = 0`, discarding any prior partial progress.
    pub fn from_completed(completed: bool) -> Self {
        Self {
            progress: if completed { 100 } else { 0 },
            completed,
        }
    }
}
