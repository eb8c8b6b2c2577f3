//! Residual network representation.

/// A directed edge with residual capacity.
///
/// `cap` is the remaining capacity; pushing flow decrements it and
/// increments the paired reverse edge's capacity by the same amount, so
/// the original capacity is `cap + reverse.cap` at all times.
#[derive(Debug, Clone)]
pub struct FlowEdge {
    /// Target node.
    pub to: usize,
    /// Index of the paired reverse edge within `adjacency[to]`.
    pub rev: usize,
    /// Remaining (residual) capacity.
    pub cap: i64,
}

/// A capacitated directed graph with a designated source and sink.
#[derive(Debug, Clone)]
pub struct FlowNetwork {
    pub(super) adjacency: Vec<Vec<FlowEdge>>,
    pub(super) source: usize,
    pub(super) sink: usize,
}

impl FlowNetwork {
    /// Creates a network with `node_count` nodes and no edges.
    ///
    /// `source` and `sink` must be valid node indices.
    pub fn new(node_count: usize, source: usize, sink: usize) -> Self {
        debug_assert!(source < node_count && sink < node_count);
        Self {
            adjacency: vec![Vec::new(); node_count],
            source,
            sink,
        }
    }

    /// Adds a forward edge and its zero-capacity residual partner.
    pub fn add_edge(&mut self, from: usize, to: usize, cap: i64) {
        let rev_from = self.adjacency[to].len();
        let rev_to = self.adjacency[from].len();
        self.adjacency[from].push(FlowEdge {
            to,
            rev: rev_from,
            cap,
        });
        self.adjacency[to].push(FlowEdge {
            to: from,
            rev: rev_to,
            cap: 0,
        });
    }

    /// Edges leaving a node, in insertion order.
    pub fn edges_from(&self, node: usize) -> &[FlowEdge] {
        &self.adjacency[node]
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Source node index.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Sink node index.
    pub fn sink(&self) -> usize {
        self.sink
    }
}
