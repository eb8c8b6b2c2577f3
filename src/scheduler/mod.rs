//! Network construction, solving, and result analysis.
//!
//! `FlowScheduler` runs the full pipeline for one roster: build the
//! four-layer flow network, compute the maximum matching with Dinic's
//! algorithm, extract assignments from the saturated edges, then derive
//! staffing gaps, reserves, and the advisory publication structures.
//!
//! The matching is exact: the flow value equals the largest number of
//! role slots that can be simultaneously filled under weekly caps,
//! per-shift role exclusivity, and shift-type eligibility.

mod analysis;
mod engine;
mod network;

pub use analysis::{capacity_fan_out, find_gaps, pick_reserves};
pub use engine::FlowScheduler;
pub use network::RosterNetwork;
