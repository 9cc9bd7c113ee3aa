use crate::analysis::center::{CityStats, eccentricities, find_center};
use crate::analysis::paths::{Route, recompute, shortest_path};
use crate::analysis::table::{Distance, DistanceTable};
use crate::error::GraphError;
use crate::graph::edge::Road;
use crate::graph::graph::Graph;
use std::mem;

/// Owns the road graph and the distance table derived from it.
///
/// Every mutation rebuilds the whole table and swaps it in, so between
/// calls the table always matches the graph.
pub struct RoadNetwork {
    graph: Graph,
    previous_table: Option<DistanceTable>,
    current_table: DistanceTable,
    revision: usize,
}

impl RoadNetwork {
    pub fn new(graph: Graph) -> Self {
        let current_table = recompute(&graph);
        Self {
            graph,
            previous_table: None,
            current_table,
            revision: 0,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn revision(&self) -> usize {
        self.revision
    }

    pub fn previous_table(&self) -> &DistanceTable {
        self.previous_table
            .as_ref()
            .unwrap_or(&self.current_table)
    }

    fn publish(&mut self) {
        let table = recompute(&self.graph);
        let old_table = mem::replace(&mut self.current_table, table);
        self.previous_table = Some(old_table);
        self.revision += 1;
    }

    /// Adds or overwrites a road, then rebuilds the table.
    pub fn add_connection(
        &mut self,
        origin: &str,
        destination: &str,
        weight: i64,
    ) -> Result<(), GraphError> {
        self.graph.add_edge(origin, destination, weight)?;
        self.publish();
        Ok(())
    }

    /// Removes a road if present and rebuilds the table either way.
    pub fn remove_connection(&mut self, origin: &str, destination: &str) -> bool {
        let removed = self.graph.remove_edge(origin, destination);
        self.publish();
        removed
    }

    pub fn get_distance(&self, origin: &str, destination: &str) -> Result<Distance, GraphError> {
        self.current_table.distance(origin, destination)
    }

    pub fn get_path(&self, origin: &str, destination: &str) -> Result<Route, GraphError> {
        shortest_path(&self.graph, origin, destination)
    }

    pub fn get_center(&self) -> Result<String, GraphError> {
        find_center(&self.current_table)
    }

    pub fn list_edges(&self) -> impl Iterator<Item = Road<'_>> + '_ {
        self.graph.edges()
    }

    pub fn stats(&self) -> Vec<CityStats> {
        eccentricities(&self.current_table)
    }

    pub fn previous_stats(&self) -> Vec<CityStats> {
        eccentricities(self.previous_table())
    }
}
