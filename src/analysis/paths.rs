use crate::analysis::table::DistanceTable;
use crate::error::GraphError;
use crate::graph::graph::Graph;
use crate::graph::node::NodeId;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Outcome of a path query between two known cities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Path { cities: Vec<String>, km: u64 },
    Unreachable,
}

struct Search {
    dist: Vec<Option<u64>>,
    prev: Vec<Option<NodeId>>,
}

/// Dijkstra from `source`, indexed by `NodeId`. Stops once `target` is
/// settled when one is given.
fn dijkstra(graph: &Graph, source: NodeId, target: Option<NodeId>) -> Search {
    let n = graph.slot_count();
    let mut dist: Vec<Option<u64>> = vec![None; n];
    let mut prev: Vec<Option<NodeId>> = vec![None; n];
    let mut heap = BinaryHeap::new();

    dist[source.index()] = Some(0);
    heap.push(Reverse((0u64, source.index())));

    while let Some(Reverse((cost, u))) = heap.pop() {
        // stale entry
        if dist[u].is_some_and(|d| cost > d) {
            continue;
        }
        if target == Some(NodeId(u)) {
            break;
        }
        for edge in graph.outgoing(NodeId(u)) {
            let v = edge.to().index();
            let next = cost + edge.weight();
            if dist[v].is_none_or(|d| next < d) {
                dist[v] = Some(next);
                prev[v] = Some(NodeId(u));
                heap.push(Reverse((next, v)));
            }
        }
    }

    Search { dist, prev }
}

/// Rebuilds the full distance table, one Dijkstra run per city.
pub fn recompute(graph: &Graph) -> DistanceTable {
    let present = graph.nodes().map(|n| *n.id()).collect::<Vec<NodeId>>();
    let cities: Vec<String> = present
        .iter()
        .map(|id| graph.node_by_id(*id).name().to_string())
        .collect();
    let rows: Vec<Vec<Option<u64>>> = present
        .iter()
        .map(|source| {
            let search = dijkstra(graph, *source, None);
            present.iter().map(|id| search.dist[id.index()]).collect()
        })
        .collect();
    DistanceTable::new(cities, rows)
}

/// Computes one shortest route on the current graph.
pub fn shortest_path(graph: &Graph, origin: &str, destination: &str) -> Result<Route, GraphError> {
    let from = graph
        .lookup(origin)
        .ok_or_else(|| GraphError::UnknownNode(origin.to_string()))?;
    let to = graph
        .lookup(destination)
        .ok_or_else(|| GraphError::UnknownNode(destination.to_string()))?;

    if from == to {
        return Ok(Route::Path {
            cities: vec![origin.to_string()],
            km: 0,
        });
    }

    let search = dijkstra(graph, from, Some(to));
    let Some(km) = search.dist[to.index()] else {
        return Ok(Route::Unreachable);
    };

    let mut cities = vec![graph.node_by_id(to).name().to_string()];
    let mut current = to;
    while let Some(p) = search.prev[current.index()] {
        cities.push(graph.node_by_id(p).name().to_string());
        current = p;
    }
    cities.reverse();

    Ok(Route::Path { cities, km })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::table::Distance;
    use crate::graph::edge::MAX_WEIGHT;

    fn graph(roads: &[(&str, &str, i64)]) -> Graph {
        let mut graph = Graph::new();
        roads
            .iter()
            .for_each(|(from, to, km)| graph.add_edge(from, to, *km).unwrap());
        graph
    }

    fn ring() -> Graph {
        graph(&[
            ("CiudadA", "CiudadB", 10),
            ("CiudadB", "CiudadC", 20),
            ("CiudadC", "CiudadD", 15),
            ("CiudadD", "CiudadE", 30),
            ("CiudadE", "CiudadA", 40),
        ])
    }

    fn path_weight(graph: &Graph, cities: &[String]) -> u64 {
        cities
            .windows(2)
            .map(|pair| graph.weight(&pair[0], &pair[1]).unwrap())
            .sum()
    }

    #[test]
    fn test_self_distance_is_zero() {
        let graph = ring();
        let table = recompute(&graph);

        for city in table.cities() {
            assert_eq!(Ok(Distance::Km(0)), table.distance(city, city));
        }
    }

    #[test]
    fn test_ring_distances_and_paths() {
        let graph = ring();
        let table = recompute(&graph);

        assert_eq!(Ok(Distance::Km(30)), table.distance("CiudadA", "CiudadC"));
        assert_eq!(Ok(Distance::Km(75)), table.distance("CiudadA", "CiudadE"));

        let Ok(Route::Path { cities, km }) = shortest_path(&graph, "CiudadA", "CiudadE") else {
            panic!("expected a route");
        };
        assert_eq!(
            vec!["CiudadA", "CiudadB", "CiudadC", "CiudadD", "CiudadE"],
            cities
        );
        assert_eq!(75, km);
    }

    #[test]
    fn test_path_weight_matches_table() {
        let graph = graph(&[
            ("A", "B", 4),
            ("A", "C", 1),
            ("C", "B", 2),
            ("B", "D", 1),
            ("C", "D", 5),
            ("D", "A", 3),
        ]);
        let table = recompute(&graph);

        for origin in table.cities() {
            for destination in table.cities() {
                let Ok(Route::Path { cities, km }) = shortest_path(&graph, origin, destination)
                else {
                    panic!("{origin} -> {destination} should be reachable");
                };
                assert_eq!(Ok(Distance::Km(km)), table.distance(origin, destination));
                assert_eq!(km, path_weight(&graph, &cities));
                assert_eq!(origin, &cities[0]);
                assert_eq!(destination, cities.last().unwrap());
            }
        }
    }

    #[test]
    fn test_unreachable_pair() {
        let graph = graph(&[("A", "B", 5)]);
        let table = recompute(&graph);

        assert_eq!(Ok(Distance::Unreachable), table.distance("B", "A"));
        assert_eq!(Ok(Distance::Km(5)), table.distance("A", "B"));
        assert_eq!(Ok(Route::Unreachable), shortest_path(&graph, "B", "A"));
        assert_eq!(
            Ok(Route::Path {
                cities: vec!["A".into(), "B".into()],
                km: 5
            }),
            shortest_path(&graph, "A", "B")
        );
    }

    #[test]
    fn test_unknown_city() {
        let graph = graph(&[("A", "B", 5)]);
        let table = recompute(&graph);

        assert_eq!(
            Err(GraphError::UnknownNode("X".into())),
            table.distance("X", "A")
        );
        assert_eq!(
            Err(GraphError::UnknownNode("X".into())),
            shortest_path(&graph, "A", "X")
        );
    }

    #[test]
    fn test_same_origin_and_destination() {
        let graph = graph(&[("A", "B", 5), ("B", "B", 7)]);

        let expected = |name: &str| -> Result<Route, GraphError> {
            Ok(Route::Path {
                cities: vec![name.to_string()],
                km: 0,
            })
        };
        assert_eq!(expected("A"), shortest_path(&graph, "A", "A"));
        assert_eq!(expected("B"), shortest_path(&graph, "B", "B"));
        assert_eq!(Ok(Distance::Km(0)), recompute(&graph).distance("B", "B"));
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let graph = ring();

        assert_eq!(recompute(&graph), recompute(&graph));
    }

    #[test]
    fn test_zero_weight_roads() {
        let graph = graph(&[("A", "B", 0), ("B", "C", 0), ("A", "C", 1)]);
        let table = recompute(&graph);

        assert_eq!(Ok(Distance::Km(0)), table.distance("A", "C"));
    }

    #[test]
    fn test_long_roads_keep_exact_sums() {
        let m = MAX_WEIGHT as i64;
        let graph = graph(&[
            ("A", "P", m),
            ("P", "Q", m),
            ("Q", "D", m),
            ("A", "X", m),
            ("X", "Y", m),
            ("Y", "D", m - 1000),
        ]);
        let km = 3 * MAX_WEIGHT - 1000;

        assert_eq!(Ok(Distance::Km(km)), recompute(&graph).distance("A", "D"));
        assert_eq!(
            Ok(Route::Path {
                cities: vec!["A".into(), "X".into(), "Y".into(), "D".into()],
                km
            }),
            shortest_path(&graph, "A", "D")
        );
    }

    #[test]
    fn test_empty_graph_has_empty_table() {
        let table = recompute(&Graph::new());

        assert!(table.cities().is_empty());
    }
}
