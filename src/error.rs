use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the road graph and the queries run against it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Road weights are kilometers: never negative, at most `MAX_WEIGHT`.
    #[error("invalid weight {weight} for road {origin} -> {destination}")]
    InvalidWeight {
        origin: String,
        destination: String,
        weight: i64,
    },

    #[error("unknown city: {0}")]
    UnknownNode(String),

    #[error("the road network has no cities")]
    EmptyGraph,
}

/// Errors raised while reading an initial road list.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: weight {token:?} is not an integer")]
    BadWeight { line: usize, token: String },

    #[error("line {line}: {source}")]
    Graph {
        line: usize,
        #[source]
        source: GraphError,
    },
}
