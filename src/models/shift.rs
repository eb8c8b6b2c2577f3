//! Shift model.
//!
//! A shift is one occurrence of work to be staffed. Its type gates
//! eligibility; the day is informational and plays no part in matching.

use serde::{Deserialize, Serialize};

/// A single shift occurrence within the scheduling period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique shift identifier.
    pub id: String,
    /// Shift-type identifier (e.g. "day", "night").
    pub shift_type: String,
    /// Day of the period this shift falls on, if known.
    pub day: Option<String>,
}

impl Shift {
    /// Creates a shift of the given type.
    pub fn new(id: impl Into<String>, shift_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            shift_type: shift_type.into(),
            day: None,
        }
    }

    /// Sets the day.
    pub fn with_day(mut self, day: impl Into<String>) -> Self {
        self.day = Some(day.into());
        self
    }
}
