//! Capacitated flow network and max-flow solver.
//!
//! `FlowNetwork` stores index-based adjacency lists; each edge carries
//! the index of its paired reverse edge so residual updates are O(1)
//! with no pointer cycles. `max_flow` implements Dinic's blocking-flow
//! algorithm: BFS layering, then cursor-based DFS saturating all
//! shortest augmenting paths per phase.
//!
//! # References
//!
//! - Dinic (1970), "Algorithm for Solution of a Problem of Maximum Flow
//!   in a Network with Power Estimation"
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 26.2

mod dinic;
mod network;

pub use network::{FlowEdge, FlowNetwork};
