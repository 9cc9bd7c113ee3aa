use crate::error::LoadError;
use crate::scenario::file::parse_roads;
use crate::scenario::scenario::{RoadSpec, Scenario};

const GUATEGRAFO: &str = include_str!("../../data/guategrafo.txt");

/// Built-in sample network of Guatemalan cities, used when no road list is
/// given. Same format as a road file.
#[derive(Default)]
pub struct BasicScenario;

impl BasicScenario {
    pub fn new() -> Self {
        Self
    }
}

impl Scenario for BasicScenario {
    fn name(&self) -> &str {
        "basic"
    }

    fn roads(&self) -> Result<Vec<RoadSpec>, LoadError> {
        parse_roads(GUATEGRAFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::center::Eccentricity;
    use crate::analysis::table::Distance;
    use crate::network::engine::RoadNetwork;
    use crate::scenario::scenario::build_graph;

    #[test]
    fn test_sample_network_is_strongly_connected() {
        let network = RoadNetwork::new(build_graph(&BasicScenario::new()).unwrap());

        assert_eq!(9, network.graph().node_count());
        assert!(
            network
                .stats()
                .iter()
                .all(|s| s.reachable() == 8 && s.eccentricity() != Eccentricity::Infinite)
        );
        assert!(network.get_center().is_ok());
    }

    #[test]
    fn test_sample_route() {
        let network = RoadNetwork::new(build_graph(&BasicScenario::new()).unwrap());

        // via Chimaltenango
        assert_eq!(
            Ok(Distance::Km(54 + 146 + 88)),
            network.get_distance("Guatemala", "Huehuetenango")
        );
        assert_eq!(9, network.stats().len());
    }

    #[test]
    fn test_bundled_road_list_parses_completely() {
        let roads = BasicScenario::new().roads().unwrap();

        assert_eq!(18, roads.len());
        assert_eq!(RoadSpec::new(1, "Guatemala", "Mixco", 17), roads[0]);
        assert_eq!(RoadSpec::new(18, "Coban", "Guatemala", 211), roads[17]);
    }
}
