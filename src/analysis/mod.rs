pub mod center;
pub mod paths;
pub mod table;
pub mod trend;
