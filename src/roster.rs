//! Roster intake.
//!
//! Normalizes raw records from the domain-model loader into the
//! `Employee`/`Shift` facts the scheduler consumes. Applies the
//! absorb-or-abort policy:
//! - missing restaurant identity → fatal
//! - employee without a role → dropped with a warning
//! - no usable employees → fatal
//! - empty eligible-type set → defaulted to all known shift types
//! - missing/unparseable weekly cap → silent default of 5
//! - shift without a type → dropped with a warning
//! - no shifts at all → fine (downstream solve is trivially successful)
//!
//! Defaulting happens here, at load time: an employee reaching the
//! matcher with an empty eligibility set would mean "eligible for
//! nothing", which is not what an empty input set means.

use serde::{Deserialize, Serialize};

use crate::error::{RosterError, RosterResult};
use crate::models::{Employee, Shift, DEFAULT_WEEKLY_CAP};

/// An employee record as the loader delivers it, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawEmployee {
    /// Unique employee identifier.
    pub id: String,
    /// Role, if the record carries one.
    pub role: Option<String>,
    /// Eligible shift types; empty means "all known types".
    pub eligible_shift_types: Vec<String>,
    /// Weekly cap in its stored textual form.
    pub weekly_cap: Option<String>,
}

/// A shift record as the loader delivers it, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawShift {
    /// Unique shift identifier.
    pub id: String,
    /// Shift type, if the record carries one.
    pub shift_type: Option<String>,
    /// Optional day label.
    pub day: Option<String>,
}

/// Everything the loader hands over for one solve.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterRequest {
    /// Restaurant the roster is for.
    pub restaurant: String,
    /// All shift types known to the restaurant.
    pub shift_types: Vec<String>,
    /// Employee records, in load order.
    pub employees: Vec<RawEmployee>,
    /// Shift records, in load order.
    pub shifts: Vec<RawShift>,
}

/// Normalized input facts for one solve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    /// Restaurant the roster is for.
    pub restaurant: String,
    /// All known shift types.
    pub shift_types: Vec<String>,
    /// Usable employees, in load order.
    pub employees: Vec<Employee>,
    /// Usable shifts, in load order.
    pub shifts: Vec<Shift>,
}

impl RosterRequest {
    /// Creates a request for a restaurant.
    pub fn new(restaurant: impl Into<String>) -> Self {
        Self {
            restaurant: restaurant.into(),
            ..Self::default()
        }
    }

    /// Adds a known shift type.
    pub fn with_shift_type(mut self, shift_type: impl Into<String>) -> Self {
        self.shift_types.push(shift_type.into());
        self
    }

    /// Adds an employee record.
    pub fn with_employee(mut self, employee: RawEmployee) -> Self {
        self.employees.push(employee);
        self
    }

    /// Adds a shift record.
    pub fn with_shift(mut self, shift: RawShift) -> Self {
        self.shifts.push(shift);
        self
    }
}

impl Roster {
    /// Validates and normalizes a request.
    ///
    /// Fails only for a blank restaurant identity or an employee list
    /// that is empty after dropping unusable records. Dropped records
    /// are logged as warnings.
    pub fn build(request: RosterRequest) -> RosterResult<Self> {
        if request.restaurant.trim().is_empty() {
            return Err(RosterError::InvalidRestaurant);
        }

        let mut employees = Vec::with_capacity(request.employees.len());
        for raw in request.employees {
            let role = match raw.role {
                Some(role) if !role.trim().is_empty() => role,
                _ => {
                    log::warn!("employee '{}' has no role, skipped", raw.id);
                    continue;
                }
            };

            let eligible = if raw.eligible_shift_types.is_empty() {
                request.shift_types.clone()
            } else {
                raw.eligible_shift_types
            };

            let weekly_cap = parse_weekly_cap(raw.weekly_cap.as_deref());

            employees.push(
                Employee::new(raw.id, role)
                    .with_shift_types(eligible)
                    .with_weekly_cap(weekly_cap),
            );
        }

        if employees.is_empty() {
            return Err(RosterError::NoEmployees {
                restaurant: request.restaurant,
            });
        }

        let mut shifts = Vec::with_capacity(request.shifts.len());
        for raw in request.shifts {
            let shift_type = match raw.shift_type {
                Some(t) if !t.trim().is_empty() => t,
                _ => {
                    log::warn!("shift '{}' has no type, skipped", raw.id);
                    continue;
                }
            };

            let mut shift = Shift::new(raw.id, shift_type);
            shift.day = raw.day;
            shifts.push(shift);
        }

        Ok(Self {
            restaurant: request.restaurant,
            shift_types: request.shift_types,
            employees,
            shifts,
        })
    }
}

/// Parses a stored weekly-cap value, falling back to the default on
/// anything missing or unparseable. An explicit `"0"` is honored.
fn parse_weekly_cap(value: Option<&str>) -> usize {
    match value {
        Some(text) => text.trim().parse().unwrap_or(DEFAULT_WEEKLY_CAP),
        None => DEFAULT_WEEKLY_CAP,
    }
}
