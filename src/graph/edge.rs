use crate::graph::node::NodeId;

/// Largest accepted road length. Path sums over such roads cannot overflow
/// a `u64`.
pub const MAX_WEIGHT: u64 = u32::MAX as u64;

/// A one-way road segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    from: NodeId,
    to: NodeId,
    /// kilometers
    weight: u64,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId, weight: u64) -> Self {
        Self { from, to, weight }
    }

    pub fn from(&self) -> NodeId {
        self.from
    }

    pub fn to(&self) -> NodeId {
        self.to
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: u64) {
        self.weight = weight;
    }
}

/// Named view of an edge handed out to callers outside the graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Road<'a> {
    pub origin: &'a str,
    pub destination: &'a str,
    pub weight: u64,
}
