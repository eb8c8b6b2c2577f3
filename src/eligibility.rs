//! Shift-type eligibility.
//!
//! The can-work relation gates every structural decision downstream:
//! solver edges, reserve candidacy, and the advisory eligibility facts
//! published with the schedule. It is a pure membership test over the
//! employee's (already defaulted) eligible-type set.

use crate::models::{CanWorkEdge, Employee, Shift};

/// Whether an employee may legally staff a shift.
///
/// True iff the shift's type is among the employee's eligible types.
/// Pure and idempotent.
pub fn can_work(employee: &Employee, shift: &Shift) -> bool {
    employee.is_eligible_for(&shift.shift_type)
}

/// Enumerates the full advisory eligibility relation in employee-major,
/// shift-minor order.
///
/// This is broader than the solved matching: it ignores caps and role
/// quotas and exists for downstream inspection.
pub fn can_work_edges(employees: &[Employee], shifts: &[Shift]) -> Vec<CanWorkEdge> {
    let mut edges = Vec::new();
    for employee in employees {
        for shift in shifts {
            if can_work(employee, shift) {
                edges.push(CanWorkEdge {
                    employee_id: employee.id.clone(),
                    shift_id: shift.id.clone(),
                });
            }
        }
    }
    edges
}
