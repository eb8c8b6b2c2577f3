//! Gap and reserve analysis.
//!
//! Post-solve reporting: which (shift, role) pairs came up short, who
//! could stand by for each position, and the per-employee capacity
//! fan-out published for downstream inspection.

use crate::eligibility;
use crate::models::{CapacitySlot, Employee, Reserve, RoleRequirements, Shift, StaffingGap};

/// Emits one gap record per (shift, role) pair whose filled count fell
/// short of the requirement. `assigned_roles` holds, per shift index,
/// the roles of that shift's assignments.
///
/// Each shortfall is also logged as a warning.
pub fn find_gaps(
    shifts: &[Shift],
    requirements: &RoleRequirements,
    assigned_roles: &[Vec<String>],
) -> Vec<StaffingGap> {
    let mut gaps = Vec::new();
    for (shift_index, shift) in shifts.iter().enumerate() {
        for (role, required) in requirements.iter() {
            let filled = assigned_roles[shift_index]
                .iter()
                .filter(|r| r.as_str() == role)
                .count();
            if filled < required {
                let missing = required - filled;
                log::warn!(
                    "shift '{}' is missing {missing} employee(s) for role '{role}'",
                    shift.id
                );
                gaps.push(StaffingGap {
                    shift_id: shift.id.clone(),
                    role: role.to_string(),
                    missing,
                });
            }
        }
    }
    gaps
}

/// Picks at most one stand-by employee per (shift, role): the first
/// employee in load order whose role matches, who is eligible for the
/// shift's type, and who is not already assigned to that shift.
///
/// The load-order tie-break is arbitrary but deterministic; it carries
/// no semantic weight beyond reproducibility.
pub fn pick_reserves(
    employees: &[Employee],
    shifts: &[Shift],
    requirements: &RoleRequirements,
    assigned_employees: &[Vec<usize>],
) -> Vec<Reserve> {
    let mut reserves = Vec::new();
    for (shift_index, shift) in shifts.iter().enumerate() {
        for (role, _) in requirements.iter() {
            let candidate = employees.iter().enumerate().find(|(i, employee)| {
                employee.role == role
                    && eligibility::can_work(employee, shift)
                    && !assigned_employees[shift_index].contains(i)
            });
            if let Some((_, employee)) = candidate {
                reserves.push(Reserve {
                    shift_id: shift.id.clone(),
                    employee_id: employee.id.clone(),
                    role: role.to_string(),
                });
            }
        }
    }
    reserves
}

/// Fans each employee's weekly capacity out into inspection records: one
/// `CapacitySlot` per availability unit, each linked to every shift the
/// employee is eligible for.
pub fn capacity_fan_out(employees: &[Employee], shifts: &[Shift]) -> Vec<CapacitySlot> {
    let mut slots = Vec::new();
    for employee in employees {
        let eligible_shift_ids: Vec<String> = shifts
            .iter()
            .filter(|shift| eligibility::can_work(employee, shift))
            .map(|shift| shift.id.clone())
            .collect();

        for ordinal in 1..=employee.weekly_cap {
            slots.push(CapacitySlot {
                employee_id: employee.id.clone(),
                ordinal,
                shift_ids: eligible_shift_ids.clone(),
            });
        }
    }
    slots
}
