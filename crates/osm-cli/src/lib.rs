//! Pipeline driver and run configuration behind the `osm-wrangle` binary.

pub mod audit;
pub mod config;
pub mod logging;
pub mod pipeline;
pub mod types;
