use crate::analysis::center::{CityStats, Eccentricity};

#[derive(Debug, PartialEq)]
pub enum Trend {
    Up,
    Down,
    Flat,
    /// city was not part of the previous revision
    New,
}

/// How a city's eccentricity moved between two revisions.
pub fn eccentricity_trend(current: &CityStats, previous: &[CityStats]) -> Trend {
    let Some(before) = previous.iter().find(|s| s.name() == current.name()) else {
        return Trend::New;
    };
    match (before.eccentricity(), current.eccentricity()) {
        (a, b) if a == b => Trend::Flat,
        (Eccentricity::Finite(a), Eccentricity::Finite(b)) if b > a => Trend::Up,
        (Eccentricity::Finite(_), Eccentricity::Infinite) => Trend::Up,
        _ => Trend::Down,
    }
}

pub fn trends(current: &[CityStats], previous: &[CityStats]) -> Vec<Trend> {
    current
        .iter()
        .map(|s| eccentricity_trend(s, previous))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::center::eccentricities;
    use crate::analysis::paths::recompute;
    use crate::graph::graph::Graph;

    #[test]
    fn test_trend_detection() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 5).unwrap();
        graph.add_edge("B", "C", 5).unwrap();
        graph.add_edge("C", "A", 5).unwrap();
        let before = eccentricities(&recompute(&graph));

        // shortcut A -> C, cut B -> C, new city D
        graph.add_edge("A", "C", 1).unwrap();
        graph.remove_edge("B", "C");
        graph.add_edge("C", "D", 1).unwrap();
        let after = eccentricities(&recompute(&graph));

        // A: 10 -> 5, B: 10 -> inf, C: 10 -> 10, D: new
        assert_eq!(
            vec![Trend::Down, Trend::Up, Trend::Flat, Trend::New],
            trends(&after, &before)
        );
    }

    #[test]
    fn test_unchanged_graph_is_flat() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 5).unwrap();
        let stats = eccentricities(&recompute(&graph));

        assert_eq!(vec![Trend::Flat, Trend::Flat], trends(&stats, &stats));
    }
}
