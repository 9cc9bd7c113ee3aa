use crate::analysis::table::DistanceTable;
use crate::error::GraphError;
use std::fmt;

/// Worst-case outbound distance of a city. `Infinite` sorts after every
/// finite value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Eccentricity {
    Finite(u64),
    Infinite,
}

impl fmt::Display for Eccentricity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Eccentricity::Finite(km) => f.pad(&km.to_string()),
            Eccentricity::Infinite => f.pad("inf"),
        }
    }
}

pub struct CityStats {
    name: String,
    eccentricity: Eccentricity,
    /// other cities reachable from this one
    reachable: usize,
    mean_distance: Option<f64>,
}

impl CityStats {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn eccentricity(&self) -> Eccentricity {
        self.eccentricity
    }

    pub fn reachable(&self) -> usize {
        self.reachable
    }

    pub fn mean_distance(&self) -> Option<f64> {
        self.mean_distance
    }
}

/// Per-city statistics in the table's canonical order.
pub fn eccentricities(table: &DistanceTable) -> Vec<CityStats> {
    table
        .cities()
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let (reachable, total, max) = table
                .row(i)
                .filter(|(other, _)| *other != name.as_str())
                .fold((0usize, 0u64, 0u64), |(cnt, sum, max), (_, km)| {
                    (cnt + 1, sum.saturating_add(km), max.max(km))
                });
            let (eccentricity, mean_distance) = if reachable == 0 {
                (Eccentricity::Infinite, None)
            } else {
                (
                    Eccentricity::Finite(max),
                    Some(total as f64 / reachable as f64),
                )
            };
            CityStats {
                name: name.clone(),
                eccentricity,
                reachable,
                mean_distance,
            }
        })
        .collect()
}

/// City with the smallest eccentricity. Ties go to the earliest city in
/// canonical order.
pub fn find_center(table: &DistanceTable) -> Result<String, GraphError> {
    eccentricities(table)
        .into_iter()
        .min_by_key(|s| s.eccentricity)
        .map(|s| s.name)
        .ok_or(GraphError::EmptyGraph)
}
