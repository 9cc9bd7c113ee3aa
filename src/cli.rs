use crate::scenario::basic::BasicScenario;
use crate::scenario::file::FileScenario;
use crate::scenario::random::RandomScenario;
use crate::scenario::scenario::Scenario;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Shortest routes and the best-placed hub of a one-way road network.
#[derive(Parser, Debug)]
#[command(name = "roadgraph", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to this file (the interactive menu logs nowhere otherwise)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Road list with one `origin destination km` per line
    #[arg(short, long, value_name = "PATH", conflicts_with = "random")]
    pub file: Option<PathBuf>,

    /// Generate a random network from this seed
    #[arg(long, value_name = "SEED")]
    pub random: Option<u64>,

    /// Number of cities for a generated network
    #[arg(long, default_value_t = 12)]
    pub cities: usize,
}

impl SourceArgs {
    /// The built-in sample network is used when neither a file nor a seed
    /// is given.
    pub fn scenario(&self) -> Box<dyn Scenario> {
        match (&self.file, self.random) {
            (Some(path), _) => Box::new(FileScenario::new(path)),
            (None, Some(seed)) => Box::new(RandomScenario::new(seed, self.cities)),
            (None, None) => Box::new(BasicScenario::new()),
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Interactive menu (default)
    Interactive,

    /// Shortest distance and route between two cities
    Route { origin: String, destination: String },

    /// City with the smallest worst-case distance to the cities it reaches
    Center,

    /// List every road
    Edges,

    /// Eccentricity, reach and mean distance of every city
    Stats,
}
