use crate::error::GraphError;
use crate::graph::edge::{Edge, MAX_WEIGHT, Road};
use crate::graph::node::{Node, NodeId};
use std::collections::HashMap;

/// Directed road network keyed by city name.
///
/// City names are interned on first sight and keep their `NodeId` for the
/// life of the graph, but a city only counts as a node while at least one
/// road starts or ends there.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    node_index: HashMap<String, NodeId>,
    adj: Vec<Vec<Edge>>,
    in_degree: Vec<usize>,
    edge_count: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    fn intern(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.node_index.get(name) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(id, name));
        self.node_index.insert(name.to_string(), id);
        self.adj.push(Vec::new());
        self.in_degree.push(0);
        id
    }

    fn is_present(&self, id: NodeId) -> bool {
        !self.adj[id.index()].is_empty() || self.in_degree[id.index()] > 0
    }

    /// Inserts the road or overwrites the weight of an existing one.
    pub fn add_edge(
        &mut self,
        origin: &str,
        destination: &str,
        weight: i64,
    ) -> Result<(), GraphError> {
        let weight = u64::try_from(weight)
            .ok()
            .filter(|km| *km <= MAX_WEIGHT)
            .ok_or_else(|| GraphError::InvalidWeight {
                origin: origin.to_string(),
                destination: destination.to_string(),
                weight,
            })?;

        let from = self.intern(origin);
        let to = self.intern(destination);

        match self.adj[from.index()].iter_mut().find(|e| e.to() == to) {
            Some(edge) => edge.set_weight(weight),
            None => {
                self.adj[from.index()].push(Edge::new(from, to, weight));
                self.in_degree[to.index()] += 1;
                self.edge_count += 1;
            }
        }
        Ok(())
    }

    /// Removes the road if present. Returns whether anything was removed.
    pub fn remove_edge(&mut self, origin: &str, destination: &str) -> bool {
        let (Some(&from), Some(&to)) = (
            self.node_index.get(origin),
            self.node_index.get(destination),
        ) else {
            return false;
        };
        let out = &mut self.adj[from.index()];
        match out.iter().position(|e| e.to() == to) {
            Some(pos) => {
                out.remove(pos);
                self.in_degree[to.index()] -= 1;
                self.edge_count -= 1;
                true
            }
            None => false,
        }
    }

    pub fn has_edge(&self, origin: &str, destination: &str) -> bool {
        self.weight(origin, destination).is_some()
    }

    pub fn weight(&self, origin: &str, destination: &str) -> Option<u64> {
        let from = self.node_index.get(origin)?;
        let to = self.node_index.get(destination)?;
        self.adj[from.index()]
            .iter()
            .find(|e| e.to() == *to)
            .map(|e| e.weight())
    }

    /// Id of a city currently referenced by at least one road.
    pub fn lookup(&self, name: &str) -> Option<NodeId> {
        self.node_index
            .get(name)
            .copied()
            .filter(|id| self.is_present(*id))
    }

    /// Cities referenced by any road, in first-seen order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(|n| self.is_present(*n.id()))
    }

    /// Every road, grouped by origin in first-seen order. Calling it again
    /// on an unmutated graph yields the same sequence.
    pub fn edges(&self) -> impl Iterator<Item = Road<'_>> + '_ {
        self.adj.iter().flatten().map(|e| Road {
            origin: self.nodes[e.from().index()].name(),
            destination: self.nodes[e.to().index()].name(),
            weight: e.weight(),
        })
    }

    pub fn node_by_id(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn outgoing(&self, id: NodeId) -> &[Edge] {
        &self.adj[id.index()]
    }

    /// Number of interned ids, present or not. Dense per-node buffers use this.
    pub fn slot_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.edge_count == 0
    }
}
