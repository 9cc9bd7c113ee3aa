use crate::error::LoadError;
use crate::scenario::scenario::{RoadSpec, Scenario};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Road list read from a text file, one `origin destination km` per line.
pub struct FileScenario {
    path: PathBuf,
    name: String,
}

impl FileScenario {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }
}

impl Scenario for FileScenario {
    fn name(&self) -> &str {
        &self.name
    }

    fn roads(&self) -> Result<Vec<RoadSpec>, LoadError> {
        let text = fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_roads(&text)
    }
}

/// Lines without exactly three tokens are skipped.
pub fn parse_roads(text: &str) -> Result<Vec<RoadSpec>, LoadError> {
    let mut roads = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let tokens = raw.split_whitespace().collect::<Vec<&str>>();
        let [origin, destination, weight] = tokens.as_slice() else {
            if !tokens.is_empty() {
                debug!(line, tokens = tokens.len(), "skipping malformed road line");
            }
            continue;
        };
        let weight = weight.parse::<i64>().map_err(|_| LoadError::BadWeight {
            line,
            token: weight.to_string(),
        })?;
        roads.push(RoadSpec::new(line, *origin, *destination, weight));
    }
    Ok(roads)
}
