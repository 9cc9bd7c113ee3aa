use crate::error::GraphError;
use std::collections::HashMap;
use std::fmt;

/// Outcome of a distance lookup between two known cities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Distance {
    Km(u64),
    Unreachable,
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Km(km) => write!(f, "{km} km"),
            Distance::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// All-pairs shortest distances over one revision of the graph.
///
/// Rows and columns follow the graph's canonical city order at the time the
/// table was built. `None` cells are unreachable pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DistanceTable {
    cities: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<Option<u64>>>,
}

impl DistanceTable {
    pub fn new(cities: Vec<String>, rows: Vec<Vec<Option<u64>>>) -> Self {
        debug_assert_eq!(cities.len(), rows.len());
        let index = cities
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        Self {
            cities,
            index,
            rows,
        }
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    fn require(&self, name: &str) -> Result<usize, GraphError> {
        self.position(name)
            .ok_or_else(|| GraphError::UnknownNode(name.to_string()))
    }

    pub fn distance(&self, origin: &str, destination: &str) -> Result<Distance, GraphError> {
        let from = self.require(origin)?;
        let to = self.require(destination)?;
        Ok(self.rows[from][to].map_or(Distance::Unreachable, Distance::Km))
    }

    /// Reachable destinations of the city at `position`, itself included.
    pub fn row(&self, position: usize) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.rows[position]
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.map(|km| (self.cities[i].as_str(), km)))
    }
}
