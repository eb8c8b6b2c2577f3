//! Rostering domain models.
//!
//! Core data types for one scheduling period: who can work (`Employee`),
//! what must be staffed (`Shift`, `RoleRequirements`, `ShiftSlot`), and
//! what a solve publishes (`WeekSchedule` and its record types).
//!
//! Employees and shifts are read-only facts for the duration of one
//! solve; slots and the flow network are rebuilt per invocation.

mod employee;
mod requirement;
mod schedule;
mod shift;

pub use employee::{Employee, DEFAULT_WEEKLY_CAP};
pub use requirement::{RoleRequirements, ShiftSlot};
pub use schedule::{
    Assignment, CanWorkEdge, CapacitySlot, EmployeeSchedule, Reserve, StaffingGap, WeekSchedule,
};
pub use shift::Shift;
