//! Dinic's blocking-flow max-flow algorithm.
//!
//! # Algorithm
//!
//! 1. BFS from the source assigns each node its distance in
//!    positive-residual edges. Stop once the sink is unreachable.
//! 2. DFS from the source advances only to nodes exactly one layer
//!    deeper, pushing the bottleneck capacity along each path found.
//! 3. Per-node cursors skip edges already exhausted within the phase,
//!    so each phase scans every adjacency list at most once.
//!
//! Deterministic: edges are tried in insertion order, so ties among
//! equally valid maximum flows are broken by edge-creation order.
//!
//! # Complexity
//! O(V^2 E) in general; O(E sqrt(V)) on unit-capacity bipartite
//! networks such as the rostering network.

use std::collections::VecDeque;

use super::network::FlowNetwork;

impl FlowNetwork {
    /// Computes the maximum flow from source to sink, leaving the
    /// network in its final residual state for extraction.
    pub fn max_flow(&mut self) -> i64 {
        let node_count = self.node_count();
        let source = self.source;
        let mut level = vec![-1i32; node_count];
        let mut cursor = vec![0usize; node_count];
        let mut flow = 0;

        while self.assign_levels(&mut level) {
            cursor.fill(0);
            loop {
                let pushed = self.push_flow(source, i64::MAX, &level, &mut cursor);
                if pushed == 0 {
                    break;
                }
                flow += pushed;
            }
        }
        flow
    }

    /// BFS layering over positive-residual edges. Returns whether the
    /// sink is reachable.
    fn assign_levels(&self, level: &mut [i32]) -> bool {
        level.fill(-1);
        let mut queue = VecDeque::new();
        level[self.source] = 0;
        queue.push_back(self.source);

        while let Some(node) = queue.pop_front() {
            for edge in &self.adjacency[node] {
                if edge.cap > 0 && level[edge.to] < 0 {
                    level[edge.to] = level[node] + 1;
                    queue.push_back(edge.to);
                }
            }
        }
        level[self.sink] >= 0
    }

    /// DFS along the layered network, pushing up to `limit` flow.
    /// Returns the amount pushed (0 if no augmenting path remains).
    fn push_flow(
        &mut self,
        node: usize,
        limit: i64,
        level: &[i32],
        cursor: &mut [usize],
    ) -> i64 {
        if limit == 0 {
            return 0;
        }
        if node == self.sink {
            return limit;
        }

        while cursor[node] < self.adjacency[node].len() {
            let index = cursor[node];
            let (to, cap) = {
                let edge = &self.adjacency[node][index];
                (edge.to, edge.cap)
            };

            if cap > 0 && level[to] == level[node] + 1 {
                let pushed = self.push_flow(to, limit.min(cap), level, cursor);
                if pushed > 0 {
                    let rev = {
                        let edge = &mut self.adjacency[node][index];
                        edge.cap -= pushed;
                        edge.rev
                    };
                    self.adjacency[to][rev].cap += pushed;
                    return pushed;
                }
            }
            cursor[node] += 1;
        }
        0
    }
}
