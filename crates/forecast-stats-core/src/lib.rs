pub mod config;
pub mod errors;
pub mod loader;
pub mod model;
pub mod report;
pub mod stats;
