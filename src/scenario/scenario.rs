use crate::error::LoadError;
use crate::graph::graph::Graph;
use tracing::{info, warn};

/// One road of an initial road list. `line` is 1-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoadSpec {
    pub line: usize,
    pub origin: String,
    pub destination: String,
    pub weight: i64,
}

impl RoadSpec {
    pub fn new(
        line: usize,
        origin: impl Into<String>,
        destination: impl Into<String>,
        weight: i64,
    ) -> Self {
        Self {
            line,
            origin: origin.into(),
            destination: destination.into(),
            weight,
        }
    }
}

/// Source of the road network a session starts from.
pub trait Scenario {
    fn name(&self) -> &str;
    fn roads(&self) -> Result<Vec<RoadSpec>, LoadError>;
}

/// Feeds every road to a fresh graph in order; later roads overwrite
/// earlier ones for the same pair.
pub fn build_graph(scenario: &dyn Scenario) -> Result<Graph, LoadError> {
    let mut graph = Graph::new();
    for road in scenario.roads()? {
        graph
            .add_edge(&road.origin, &road.destination, road.weight)
            .map_err(|source| LoadError::Graph {
                line: road.line,
                source,
            })?;
    }
    if graph.is_empty() {
        warn!(scenario = scenario.name(), "road network has no roads");
    }
    info!(
        scenario = scenario.name(),
        cities = graph.node_count(),
        roads = graph.edge_count(),
        "road network loaded"
    );
    Ok(graph)
}
