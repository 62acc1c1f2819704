pub mod config;
pub mod error;
pub mod placement;
pub mod telemetry;
