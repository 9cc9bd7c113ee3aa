use crate::error::LoadError;
use crate::scenario::scenario::{RoadSpec, Scenario};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded generator of a one-way road network. Every city is reachable from
/// `city-0`; extra roads are sprinkled on top.
pub struct RandomScenario {
    seed: u64,
    cities: usize,
    name: String,
}

impl RandomScenario {
    const MIN_KM: i64 = 5;
    const MAX_KM: i64 = 250;

    pub fn new(seed: u64, cities: usize) -> Self {
        Self {
            seed,
            cities,
            name: format!("random-{seed}"),
        }
    }
}

impl Scenario for RandomScenario {
    fn name(&self) -> &str {
        &self.name
    }

    fn roads(&self) -> Result<Vec<RoadSpec>, LoadError> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let n = self.cities;
        let names = (0..n).map(|i| format!("city-{i}")).collect::<Vec<_>>();

        let mut roads = Vec::new();
        let mut has_edge = vec![vec![false; n]; n];

        let mut add_road = |rng: &mut StdRng, from: usize, to: usize| {
            if from == to || has_edge[from][to] {
                return;
            }
            has_edge[from][to] = true;
            let km = rng.gen_range(Self::MIN_KM..=Self::MAX_KM);
            roads.push(RoadSpec::new(roads.len() + 1, &names[from], &names[to], km));
        };

        let mut frontier = vec![0usize];
        for to in 1..n {
            let from = frontier[rng.gen_range(0..frontier.len())];
            add_road(&mut rng, from, to);
            frontier.push(to);
        }

        let extra_roads = n * 2;
        for _ in 0..extra_roads {
            let from = rng.gen_range(0..n);
            let to = rng.gen_range(0..n);
            add_road(&mut rng, from, to);
        }

        Ok(roads)
    }
}
