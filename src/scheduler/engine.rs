//! Flow-based roster scheduler.
//!
//! Orchestrates one solve: build the network, run max-flow, read the
//! saturated edges back into assignments, then analyze gaps and
//! reserves. The solver is a pure function of the network it is given;
//! all randomness-free, so identical input yields identical output.

use crate::eligibility;
use crate::error::RosterResult;
use crate::models::{
    Assignment, EmployeeSchedule, RoleRequirements, WeekSchedule,
};
use crate::roster::{Roster, RosterRequest};
use crate::scheduler::analysis;
use crate::scheduler::network::RosterNetwork;

/// Name published on every schedule container.
const SCHEDULE_LABEL: &str = "Weekly staff schedule";

/// Max-flow shift scheduler.
///
/// The role-requirement table is injected configuration; by default it
/// is the standard restaurant mix.
///
/// # Example
///
/// ```
/// use shift_roster::models::{Employee, Shift};
/// use shift_roster::roster::Roster;
/// use shift_roster::scheduler::FlowScheduler;
///
/// let roster = Roster {
///     restaurant: "R1".into(),
///     shift_types: vec!["day".into()],
///     employees: vec![Employee::new("E1", "cook").with_shift_type("day")],
///     shifts: vec![Shift::new("S1", "day")],
/// };
///
/// let schedule = FlowScheduler::new().schedule(&roster);
/// assert_eq!(schedule.assignment_count(), 1);
/// assert!(!schedule.is_fully_staffed()); // waiters et al. are missing
/// ```
#[derive(Debug, Clone)]
pub struct FlowScheduler {
    requirements: RoleRequirements,
}

impl FlowScheduler {
    /// Creates a scheduler with the default restaurant role table.
    pub fn new() -> Self {
        Self {
            requirements: RoleRequirements::restaurant_default(),
        }
    }

    /// Replaces the role-requirement table.
    pub fn with_requirements(mut self, requirements: RoleRequirements) -> Self {
        self.requirements = requirements;
        self
    }

    /// Runs intake and then the solve.
    ///
    /// Fails only on the fatal intake conditions (blank restaurant, no
    /// usable employees). Understaffing is reported in the result, not
    /// as an error, and an empty shift list succeeds trivially.
    pub fn schedule_request(&self, request: RosterRequest) -> RosterResult<WeekSchedule> {
        let roster = Roster::build(request)?;
        Ok(self.schedule(&roster))
    }

    /// Solves one roster into a complete week schedule.
    pub fn schedule(&self, roster: &Roster) -> WeekSchedule {
        let employees = &roster.employees;
        let shifts = &roster.shifts;

        let mut network = RosterNetwork::build(employees, shifts, &self.requirements);
        let total_slots = network.slot_count();
        let flow = network.solve();
        log::info!(
            "matched {flow} of {total_slots} shift slots for restaurant '{}'",
            roster.restaurant
        );

        // Read assignments back from the residuals. A slot's reverse
        // edge toward an employee×shift node holds residual 1 exactly
        // when the forward unit edge was saturated.
        let mut assignments = Vec::with_capacity(flow as usize);
        let mut assigned_employees: Vec<Vec<usize>> = vec![Vec::new(); shifts.len()];
        let mut assigned_roles: Vec<Vec<String>> = vec![Vec::new(); shifts.len()];
        let mut assigned_shifts: Vec<Vec<String>> = vec![Vec::new(); employees.len()];

        for slot_index in 0..total_slots {
            let slot_node = network.slot_node(slot_index);
            for edge in network.network().edges_from(slot_node) {
                if network.is_employee_shift_node(edge.to) && edge.cap == 1 {
                    let (employee_index, shift_index) = network.decode_employee_shift(edge.to);
                    let role = network.slots()[slot_index].role.clone();

                    assignments.push(Assignment {
                        shift_id: shifts[shift_index].id.clone(),
                        employee_id: employees[employee_index].id.clone(),
                        role: role.clone(),
                    });
                    assigned_employees[shift_index].push(employee_index);
                    assigned_roles[shift_index].push(role);
                    assigned_shifts[employee_index].push(shifts[shift_index].id.clone());
                    break;
                }
            }
        }

        let gaps = analysis::find_gaps(shifts, &self.requirements, &assigned_roles);
        let reserves =
            analysis::pick_reserves(employees, shifts, &self.requirements, &assigned_employees);

        let employee_schedules = employees
            .iter()
            .zip(assigned_shifts)
            .map(|(employee, shift_ids)| EmployeeSchedule {
                employee_id: employee.id.clone(),
                assigned_count: shift_ids.len(),
                assigned_shifts: shift_ids,
            })
            .collect();

        WeekSchedule {
            label: SCHEDULE_LABEL.to_string(),
            restaurant: roster.restaurant.clone(),
            shift_ids: shifts.iter().map(|s| s.id.clone()).collect(),
            assignments,
            reserves,
            gaps,
            employee_schedules,
            can_work: eligibility::can_work_edges(employees, shifts),
            capacity_slots: analysis::capacity_fan_out(employees, shifts),
            all_shifts_staffed: flow as usize == total_slots,
            matched_slots: flow as usize,
            total_slots,
        }
    }
}

impl Default for FlowScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use crate::models::{Employee, Shift};
    use crate::roster::{RawEmployee, RawShift};
    use std::collections::HashSet;

    fn roster(employees: Vec<Employee>, shifts: Vec<Shift>) -> Roster {
        Roster {
            restaurant: "R1".into(),
            shift_types: vec!["day".into(), "night".into()],
            employees,
            shifts,
        }
    }

    fn full_crew(shift_type: &str) -> Vec<Employee> {
        vec![
            Employee::new("cook1", "cook").with_shift_type(shift_type),
            Employee::new("waiter1", "waiter").with_shift_type(shift_type),
            Employee::new("waiter2", "waiter").with_shift_type(shift_type),
            Employee::new("cleaner1", "cleaner").with_shift_type(shift_type),
            Employee::new("admin1", "admin").with_shift_type(shift_type),
        ]
    }

    #[test]
    fn test_exact_staffing() {
        // One shift, exactly the required crew, everyone eligible.
        let r = roster(full_crew("day"), vec![Shift::new("S1", "day")]);
        let schedule = FlowScheduler::new().schedule(&r);

        assert_eq!(schedule.matched_slots, 5);
        assert_eq!(schedule.total_slots, 5);
        assert_eq!(schedule.assignment_count(), 5);
        assert!(schedule.is_fully_staffed());
        assert!(schedule.gaps.is_empty());
        assert_eq!(schedule.assignments_for_shift("S1").len(), 5);
    }

    #[test]
    fn test_shift_type_partition() {
        // The admin may only work day shifts.
        let mut employees = full_crew("day");
        for e in &mut employees {
            e.eligible_shift_types = vec!["day".into(), "night".into()];
        }
        employees.push(Employee::new("admin_day", "admin").with_shift_type("day"));

        let r = roster(
            employees,
            vec![Shift::new("DAY", "day"), Shift::new("NIGHT", "night")],
        );
        let schedule = FlowScheduler::new().schedule(&r);

        for a in schedule.assignments_for_employee("admin_day") {
            assert_eq!(a.shift_id, "DAY");
        }
        let admin_edges: Vec<&str> = schedule
            .can_work
            .iter()
            .filter(|e| e.employee_id == "admin_day")
            .map(|e| e.shift_id.as_str())
            .collect();
        assert_eq!(admin_edges, vec!["DAY"]);
    }

    #[test]
    fn test_capacity_limits_assignments() {
        // Two shifts, a capped cook plus an uncapped one: the cap binds.
        let mut employees = full_crew("day");
        employees[0].weekly_cap = 1; // cook1
        employees.push(Employee::new("cook2", "cook").with_shift_type("day"));

        let r = roster(
            employees,
            vec![Shift::new("S1", "day"), Shift::new("S2", "day")],
        );
        let schedule = FlowScheduler::new().schedule(&r);

        assert!(schedule.assigned_count("cook1") <= 1);
        // Both cook slots are still fillable thanks to cook2.
        let cook_assignments: Vec<_> = schedule
            .assignments
            .iter()
            .filter(|a| a.role == "cook")
            .collect();
        assert_eq!(cook_assignments.len(), 2);
    }

    #[test]
    fn test_understaffing_reported() {
        // Only one waiter where two are required.
        let employees = vec![
            Employee::new("cook1", "cook").with_shift_type("day"),
            Employee::new("waiter1", "waiter").with_shift_type("day"),
            Employee::new("cleaner1", "cleaner").with_shift_type("day"),
            Employee::new("admin1", "admin").with_shift_type("day"),
        ];
        let r = roster(employees, vec![Shift::new("S1", "day")]);
        let schedule = FlowScheduler::new().schedule(&r);

        assert_eq!(schedule.assignment_count(), 4);
        assert!(!schedule.is_fully_staffed());
        let gap = schedule.gap_for("S1", "waiter").unwrap();
        assert_eq!(gap.missing, 1);
        assert_eq!(schedule.gaps.len(), 1);
    }

    #[test]
    fn test_no_shifts_is_trivial_success() {
        let r = roster(full_crew("day"), Vec::new());
        let schedule = FlowScheduler::new().schedule(&r);

        assert_eq!(schedule.assignment_count(), 0);
        assert!(schedule.gaps.is_empty());
        assert!(schedule.is_fully_staffed());
        assert_eq!(schedule.total_slots, 0);
    }

    #[test]
    fn test_flow_equals_sum_of_counts() {
        let mut employees = full_crew("day");
        employees.truncate(3); // understaffed on purpose
        let r = roster(
            employees,
            vec![Shift::new("S1", "day"), Shift::new("S2", "day")],
        );
        let schedule = FlowScheduler::new().schedule(&r);

        let count_sum: usize = schedule
            .employee_schedules
            .iter()
            .map(|s| s.assigned_count)
            .sum();
        assert_eq!(count_sum, schedule.matched_slots);
        assert_eq!(schedule.assignment_count(), schedule.matched_slots);
    }

    #[test]
    fn test_caps_never_exceeded() {
        let employees = vec![
            Employee::new("cook1", "cook")
                .with_shift_type("day")
                .with_weekly_cap(2),
            Employee::new("waiter1", "waiter")
                .with_shift_type("day")
                .with_weekly_cap(1),
        ];
        let shifts = (0..4).map(|i| Shift::new(format!("S{i}"), "day")).collect();
        let r = roster(employees.clone(), shifts);
        let schedule = FlowScheduler::new().schedule(&r);

        for e in &employees {
            assert!(schedule.assigned_count(&e.id) <= e.weekly_cap);
        }
    }

    #[test]
    fn test_role_exclusivity_per_shift() {
        // A lone waiter cannot fill both waiter slots of one shift.
        let employees = vec![Employee::new("waiter1", "waiter").with_shift_type("day")];
        let r = roster(employees, vec![Shift::new("S1", "day")]);
        let schedule = FlowScheduler::new().schedule(&r);

        assert_eq!(schedule.assignments_for_employee("waiter1").len(), 1);

        let mut seen = HashSet::new();
        for a in &schedule.assignments {
            assert!(seen.insert((a.shift_id.clone(), a.employee_id.clone())));
        }
    }

    #[test]
    fn test_zero_cap_employee_gets_nothing() {
        let mut employees = full_crew("day");
        employees[0].weekly_cap = 0; // cook1
        let r = roster(employees, vec![Shift::new("S1", "day")]);
        let schedule = FlowScheduler::new().schedule(&r);

        assert_eq!(schedule.assigned_count("cook1"), 0);
        assert!(schedule.gap_for("S1", "cook").is_some());
    }

    #[test]
    fn test_reserve_suggested_for_unfilled_role() {
        // Two cooks for one cook slot: the second stays in reserve.
        let mut employees = full_crew("day");
        employees.push(Employee::new("cook2", "cook").with_shift_type("day"));
        let r = roster(employees, vec![Shift::new("S1", "day")]);
        let schedule = FlowScheduler::new().schedule(&r);

        let reserve = schedule.reserve_for("S1", "cook").unwrap();
        assert_eq!(reserve.employee_id, "cook2");
    }

    #[test]
    fn test_deterministic_output() {
        let r = roster(
            full_crew("day"),
            vec![Shift::new("S1", "day"), Shift::new("S2", "day")],
        );
        let scheduler = FlowScheduler::new();
        let first = scheduler.schedule(&r);
        let second = scheduler.schedule(&r);
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_requirements() {
        let employees = vec![
            Employee::new("b1", "barista").with_shift_type("day"),
            Employee::new("b2", "barista").with_shift_type("day"),
        ];
        let r = roster(employees, vec![Shift::new("S1", "day")]);
        let scheduler = FlowScheduler::new()
            .with_requirements(RoleRequirements::new().with_role("barista", 2));
        let schedule = scheduler.schedule(&r);

        assert_eq!(schedule.assignment_count(), 2);
        assert!(schedule.is_fully_staffed());
    }

    #[test]
    fn test_schedule_label_and_container() {
        let r = roster(full_crew("day"), vec![Shift::new("S1", "day")]);
        let schedule = FlowScheduler::new().schedule(&r);

        assert_eq!(schedule.label, "Weekly staff schedule");
        assert_eq!(schedule.restaurant, "R1");
        assert_eq!(schedule.shift_ids, vec!["S1".to_string()]);
    }

    #[test]
    fn test_capacity_fan_out_published() {
        let employees = vec![Employee::new("cook1", "cook")
            .with_shift_type("day")
            .with_weekly_cap(2)];
        let r = roster(employees, vec![Shift::new("S1", "day")]);
        let schedule = FlowScheduler::new().schedule(&r);

        assert_eq!(schedule.capacity_slots.len(), 2);
        assert_eq!(schedule.capacity_slots[0].shift_ids, vec!["S1".to_string()]);
    }

    #[test]
    fn test_schedule_request_runs_intake() {
        let request = RosterRequest::new("R1")
            .with_shift_type("day")
            .with_employee(RawEmployee {
                id: "cook1".into(),
                role: Some("cook".into()),
                ..RawEmployee::default()
            })
            .with_shift(RawShift {
                id: "S1".into(),
                shift_type: Some("day".into()),
                day: Some("monday".into()),
            });

        let schedule = FlowScheduler::new().schedule_request(request).unwrap();
        assert_eq!(schedule.assignments_for_employee("cook1").len(), 1);
    }

    #[test]
    fn test_schedule_request_propagates_fatal_errors() {
        let request = RosterRequest::new("R1");
        assert!(matches!(
            FlowScheduler::new().schedule_request(request),
            Err(RosterError::NoEmployees { .. })
        ));
    }
}
