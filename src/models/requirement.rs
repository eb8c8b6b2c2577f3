//! Role-requirement table and slot expansion.
//!
//! A `RoleRequirements` table fixes how many employees of each role every
//! shift needs. It is immutable configuration, injected into the
//! scheduler rather than hard-coded, so deployments with a different role
//! mix can supply their own table. Table order is significant: slots are
//! expanded (and network edges created) in requirement order, which fixes
//! the tie-break among equally valid maximum matchings.

use serde::{Deserialize, Serialize};

/// Ordered table of per-shift headcount requirements by role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRequirements {
    entries: Vec<(String, usize)>,
}

/// One required staffing position: a role opening on a specific shift.
///
/// A shift needing two waiters yields two independent waiter slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftSlot {
    /// Index of the shift this slot belongs to.
    pub shift: usize,
    /// Role the occupant must have.
    pub role: String,
}

impl RoleRequirements {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The standard restaurant staffing mix: 1 cook, 2 waiters,
    /// 1 cleaner, 1 admin per shift.
    pub fn restaurant_default() -> Self {
        Self::new()
            .with_role("cook", 1)
            .with_role("waiter", 2)
            .with_role("cleaner", 1)
            .with_role("admin", 1)
    }

    /// Appends a role requirement.
    pub fn with_role(mut self, role: impl Into<String>, count: usize) -> Self {
        self.entries.push((role.into(), count));
        self
    }

    /// Iterates `(role, required headcount)` in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(r, c)| (r.as_str(), *c))
    }

    /// Required headcount for a role (0 if the role is not in the table).
    pub fn required_for(&self, role: &str) -> usize {
        self.entries
            .iter()
            .find(|(r, _)| r == role)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    /// Total positions one shift requires across all roles.
    pub fn per_shift_total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Number of roles in the table.
    pub fn role_count(&self) -> usize {
        self.entries.len()
    }

    /// Expands the table into one slot per (shift, role, ordinal), in
    /// shift-major, table-order traversal.
    pub fn expand_slots(&self, shift_count: usize) -> Vec<ShiftSlot> {
        let mut slots = Vec::with_capacity(shift_count * self.per_shift_total());
        for shift in 0..shift_count {
            for (role, count) in self.iter() {
                for _ in 0..count {
                    slots.push(ShiftSlot {
                        shift,
                        role: role.to_string(),
                    });
                }
            }
        }
        slots
    }
}

impl Default for RoleRequirements {
    fn default() -> Self {
        Self::new()
    }
}
