//! Staff rostering engine.
//!
//! Assigns employees to work shifts for a single scheduling period so that
//! per-shift role quotas are met as fully as possible, shift-type
//! eligibility is respected, and no employee exceeds their weekly cap.
//! The assignment problem is solved exactly as a maximum flow over a
//! four-layer network (employees, employee×shift, role slots, sink) using
//! Dinic's blocking-flow algorithm.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Employee`, `Shift`, `RoleRequirements`,
//!   `ShiftSlot`, `WeekSchedule` and its result records
//! - **`roster`**: Intake — raw-record normalization, defaulting, and the
//!   fatal precondition checks
//! - **`eligibility`**: The (employee, shift) can-work relation
//! - **`flow`**: Generic residual network and Dinic max-flow solver
//! - **`scheduler`**: Network construction, solving, assignment
//!   extraction, and gap/reserve analysis
//!
//! # References
//!
//! - Dinic (1970), "Algorithm for Solution of a Problem of Maximum Flow
//!   in a Network with Power Estimation"
//! - Ahuja, Magnanti & Orlin (1993), "Network Flows", Ch. 7
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 26

pub mod eligibility;
pub mod error;
pub mod flow;
pub mod models;
pub mod roster;
pub mod scheduler;

pub use error::{RosterError, RosterResult};
