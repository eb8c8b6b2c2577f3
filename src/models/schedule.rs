//! Week-schedule (solution) model.
//!
//! A `WeekSchedule` is everything one solve publishes: the assignments
//! themselves, stand-by reserves, staffing gaps, per-employee summaries,
//! and the advisory structures (can-work edges, capacity fan-out) kept
//! for downstream inspection of the solved network shape.

use serde::{Deserialize, Serialize};

/// One filled staffing position: an employee working a shift in a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Shift being worked.
    pub shift_id: String,
    /// Employee filling the position.
    pub employee_id: String,
    /// Role the position requires.
    pub role: String,
}

/// A suggested stand-by employee for a (shift, role) pair.
///
/// Reserves are advisory: the employee is eligible and unassigned on that
/// shift, but holds no position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reserve {
    /// Shift the reserve stands by for.
    pub shift_id: String,
    /// Reserve employee.
    pub employee_id: String,
    /// Role the reserve covers.
    pub role: String,
}

/// A reported shortfall between required and filled headcount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingGap {
    /// Understaffed shift.
    pub shift_id: String,
    /// Role with the shortfall.
    pub role: String,
    /// How many positions remain open.
    pub missing: usize,
}

/// Per-employee view of the solved schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSchedule {
    /// Employee this summary belongs to.
    pub employee_id: String,
    /// Shifts the employee was assigned to, in extraction order.
    pub assigned_shifts: Vec<String>,
    /// Number of assignments (always `assigned_shifts.len()`).
    pub assigned_count: usize,
}

/// Advisory "can-work" fact: the employee is eligible for the shift.
///
/// Broader than the solved matching — unconstrained by caps or quotas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanWorkEdge {
    /// Eligible employee.
    pub employee_id: String,
    /// Shift the employee may work.
    pub shift_id: String,
}

/// One unit of an employee's weekly availability budget, fanned out to
/// every shift it could cover. Published for inspection only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacitySlot {
    /// Owning employee.
    pub employee_id: String,
    /// Position within the employee's budget (1..=weekly_cap).
    pub ordinal: usize,
    /// Shifts this capacity unit could staff.
    pub shift_ids: Vec<String>,
}

/// The complete published result of one solve.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSchedule {
    /// Human-readable schedule name.
    pub label: String,
    /// Restaurant the schedule was built for.
    pub restaurant: String,
    /// All shifts the schedule covers.
    pub shift_ids: Vec<String>,
    /// Filled positions, one per saturated slot.
    pub assignments: Vec<Assignment>,
    /// Stand-by suggestions, at most one per (shift, role).
    pub reserves: Vec<Reserve>,
    /// Understaffed (shift, role) pairs.
    pub gaps: Vec<StaffingGap>,
    /// Per-employee assignment summaries, in load order.
    pub employee_schedules: Vec<EmployeeSchedule>,
    /// Advisory eligibility relation.
    pub can_work: Vec<CanWorkEdge>,
    /// Per-employee capacity fan-out.
    pub capacity_slots: Vec<CapacitySlot>,
    /// Whether every slot of every shift was filled.
    pub all_shifts_staffed: bool,
    /// Flow value: number of slots the matching filled.
    pub matched_slots: usize,
    /// Total slots the role table required.
    pub total_slots: usize,
}

impl WeekSchedule {
    /// Number of filled positions.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// All assignments on a given shift.
    pub fn assignments_for_shift(&self, shift_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.shift_id == shift_id)
            .collect()
    }

    /// All assignments held by a given employee.
    pub fn assignments_for_employee(&self, employee_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.employee_id == employee_id)
            .collect()
    }

    /// Assigned-shift count for an employee (0 if unknown).
    pub fn assigned_count(&self, employee_id: &str) -> usize {
        self.employee_schedules
            .iter()
            .find(|s| s.employee_id == employee_id)
            .map(|s| s.assigned_count)
            .unwrap_or(0)
    }

    /// The gap record for a (shift, role) pair, if understaffed.
    pub fn gap_for(&self, shift_id: &str, role: &str) -> Option<&StaffingGap> {
        self.gaps
            .iter()
            .find(|g| g.shift_id == shift_id && g.role == role)
    }

    /// The reserve for a (shift, role) pair, if any employee qualifies.
    pub fn reserve_for(&self, shift_id: &str, role: &str) -> Option<&Reserve> {
        self.reserves
            .iter()
            .find(|r| r.shift_id == shift_id && r.role == role)
    }

    /// Whether the schedule left no position open.
    pub fn is_fully_staffed(&self) -> bool {
        self.all_shifts_staffed
    }
}
