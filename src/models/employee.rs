//! Employee model.
//!
//! An employee is identified by an opaque ID and carries the three facts
//! the matcher needs: a single role, the set of shift types the employee
//! may work, and a weekly assignment cap. Records are read-only for the
//! duration of one solve; assignment counts live in the result container,
//! not here.

use serde::{Deserialize, Serialize};

/// Default weekly assignment cap applied when none is given.
pub const DEFAULT_WEEKLY_CAP: usize = 5;

/// An employee available for shift assignment.
///
/// `eligible_shift_types` is always populated by the time an `Employee`
/// reaches the matcher: intake replaces an empty input set with the full
/// list of known shift types (empty means "eligible for all", not
/// "eligible for none").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee identifier.
    pub id: String,
    /// The single role this employee can fill.
    pub role: String,
    /// Shift types this employee may work.
    pub eligible_shift_types: Vec<String>,
    /// Maximum number of shift assignments per week.
    pub weekly_cap: usize,
}

impl Employee {
    /// Creates an employee with the default weekly cap and no explicit
    /// shift-type restriction.
    pub fn new(id: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: role.into(),
            eligible_shift_types: Vec::new(),
            weekly_cap: DEFAULT_WEEKLY_CAP,
        }
    }

    /// Adds one eligible shift type.
    pub fn with_shift_type(mut self, shift_type: impl Into<String>) -> Self {
        self.eligible_shift_types.push(shift_type.into());
        self
    }

    /// Replaces the eligible shift-type set.
    pub fn with_shift_types(mut self, shift_types: Vec<String>) -> Self {
        self.eligible_shift_types = shift_types;
        self
    }

    /// Sets the weekly cap.
    pub fn with_weekly_cap(mut self, weekly_cap: usize) -> Self {
        self.weekly_cap = weekly_cap;
        self
    }

    /// Whether this employee may work shifts of the given type.
    pub fn is_eligible_for(&self, shift_type: &str) -> bool {
        self.eligible_shift_types.iter().any(|t| t == shift_type)
    }
}
