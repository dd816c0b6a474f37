//! Observability: tracing/logging setup for shopkeep processes.

pub mod tracing;

pub use tracing::init;
