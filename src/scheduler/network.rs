//! Roster flow-network construction.
//!
//! Translates employees, shifts, and role slots into a four-layer
//! capacitated network:
//!
//! ```text
//! source --cap weekly_cap--> employee --1--> employee×shift --1--> slot --1--> sink
//! ```
//!
//! The middle layer enforces role exclusivity: all of a shift's slots,
//! across every role, route through the same employee×shift node, so an
//! employee can hold at most one position per shift. Role and
//! eligibility constraints bind only on the employee×shift → slot edges.
//!
//! Node numbering is flat: employees first, then the employee×shift
//! cross nodes in employee-major order, then slots, then source, then
//! sink. Edge creation order is fixed (slots expand shift-major in role
//! table order, employees in load order) so that ties among equally
//! valid maximum matchings break deterministically.

use crate::eligibility;
use crate::flow::FlowNetwork;
use crate::models::{Employee, RoleRequirements, Shift, ShiftSlot};

/// The flow network for one roster, plus the index bookkeeping needed
/// to read assignments back out of the residuals.
#[derive(Debug)]
pub struct RosterNetwork {
    network: FlowNetwork,
    slots: Vec<ShiftSlot>,
    shift_count: usize,
    employee_shift_start: usize,
    slot_start: usize,
}

impl RosterNetwork {
    /// Builds the network for the given employees and shifts.
    ///
    /// The employee → employee×shift layer is dense: ineligible pairs
    /// simply gain no path to the sink, because eligibility gates the
    /// next layer.
    pub fn build(
        employees: &[Employee],
        shifts: &[Shift],
        requirements: &RoleRequirements,
    ) -> Self {
        let slots = requirements.expand_slots(shifts.len());
        let employee_count = employees.len();
        let shift_count = shifts.len();

        let employee_shift_start = employee_count;
        let slot_start = employee_shift_start + employee_count * shift_count;
        let source = slot_start + slots.len();
        let sink = source + 1;

        let mut network = FlowNetwork::new(sink + 1, source, sink);

        for (i, employee) in employees.iter().enumerate() {
            network.add_edge(source, i, employee.weekly_cap as i64);
        }

        for i in 0..employee_count {
            for j in 0..shift_count {
                network.add_edge(i, employee_shift_start + i * shift_count + j, 1);
            }
        }

        for (slot_index, slot) in slots.iter().enumerate() {
            let shift = &shifts[slot.shift];
            for (i, employee) in employees.iter().enumerate() {
                if employee.role != slot.role {
                    continue;
                }
                if !eligibility::can_work(employee, shift) {
                    continue;
                }
                network.add_edge(
                    employee_shift_start + i * shift_count + slot.shift,
                    slot_start + slot_index,
                    1,
                );
            }
            network.add_edge(slot_start + slot_index, sink, 1);
        }

        Self {
            network,
            slots,
            shift_count,
            employee_shift_start,
            slot_start,
        }
    }

    /// Runs the max-flow solver, returning the number of filled slots.
    pub fn solve(&mut self) -> i64 {
        self.network.max_flow()
    }

    /// The expanded slot list, parallel to the slot node range.
    pub fn slots(&self) -> &[ShiftSlot] {
        &self.slots
    }

    /// Total number of role slots across all shifts.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Node index of a slot.
    pub fn slot_node(&self, slot_index: usize) -> usize {
        self.slot_start + slot_index
    }

    /// Whether a node lies in the employee×shift layer.
    pub fn is_employee_shift_node(&self, node: usize) -> bool {
        node >= self.employee_shift_start && node < self.slot_start
    }

    /// Recovers `(employee index, shift index)` from an employee×shift
    /// node.
    pub fn decode_employee_shift(&self, node: usize) -> (usize, usize) {
        debug_assert!(self.is_employee_shift_node(node));
        let offset = node - self.employee_shift_start;
        (offset / self.shift_count, offset % self.shift_count)
    }

    /// The underlying network, for residual inspection after solving.
    pub fn network(&self) -> &FlowNetwork {
        &self.network
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_crew() -> Vec<Employee> {
        vec![
            Employee::new("cook1", "cook").with_shift_type("day"),
            Employee::new("waiter1", "waiter").with_shift_type("day"),
            Employee::new("waiter2", "waiter").with_shift_type("day"),
            Employee::new("cleaner1", "cleaner").with_shift_type("day"),
            Employee::new("admin1", "admin").with_shift_type("day"),
        ]
    }

    #[test]
    fn test_node_layout() {
        let employees = full_crew();
        let shifts = vec![Shift::new("S1", "day"), Shift::new("S2", "day")];
        let net = RosterNetwork::build(
            &employees,
            &shifts,
            &RoleRequirements::restaurant_default(),
        );

        // 5 employees + 10 cross nodes + 10 slots + source + sink.
        assert_eq!(net.network().node_count(), 27);
        assert_eq!(net.slot_count(), 10);
        assert!(net.is_employee_shift_node(5));
        assert!(net.is_employee_shift_node(14));
        assert!(!net.is_employee_shift_node(4));
        assert!(!net.is_employee_shift_node(15));
    }

    #[test]
    fn test_decode_employee_shift() {
        let employees = full_crew();
        let shifts = vec![Shift::new("S1", "day"), Shift::new("S2", "day")];
        let net = RosterNetwork::build(
            &employees,
            &shifts,
            &RoleRequirements::restaurant_default(),
        );

        // Cross nodes start at 5, employee-major with 2 shifts each.
        assert_eq!(net.decode_employee_shift(5), (0, 0));
        assert_eq!(net.decode_employee_shift(6), (0, 1));
        assert_eq!(net.decode_employee_shift(7), (1, 0));
        assert_eq!(net.decode_employee_shift(14), (4, 1));
    }

    #[test]
    fn test_source_capacity_is_weekly_cap() {
        let employees = vec![Employee::new("E1", "cook")
            .with_shift_type("day")
            .with_weekly_cap(3)];
        let shifts = vec![Shift::new("S1", "day")];
        let net = RosterNetwork::build(
            &employees,
            &shifts,
            &RoleRequirements::restaurant_default(),
        );

        let source = net.network().source();
        let edge = &net.network().edges_from(source)[0];
        assert_eq!(edge.to, 0);
        assert_eq!(edge.cap, 3);
    }

    #[test]
    fn test_ineligible_employee_has_no_slot_edge() {
        let employees = vec![Employee::new("E1", "cook").with_shift_type("night")];
        let shifts = vec![Shift::new("S1", "day")];
        let mut net = RosterNetwork::build(
            &employees,
            &shifts,
            &RoleRequirements::restaurant_default(),
        );

        // The dense middle layer exists, but no path reaches the sink.
        assert_eq!(net.solve(), 0);
    }

    #[test]
    fn test_role_mismatch_has_no_slot_edge() {
        let employees = vec![Employee::new("E1", "barista").with_shift_type("day")];
        let shifts = vec![Shift::new("S1", "day")];
        let mut net = RosterNetwork::build(
            &employees,
            &shifts,
            &RoleRequirements::restaurant_default(),
        );
        assert_eq!(net.solve(), 0);
    }

    #[test]
    fn test_full_crew_saturates_one_shift() {
        let employees = full_crew();
        let shifts = vec![Shift::new("S1", "day")];
        let mut net = RosterNetwork::build(
            &employees,
            &shifts,
            &RoleRequirements::restaurant_default(),
        );
        assert_eq!(net.solve(), 5);
    }
}
