//! Infrastructure layer: config, logging, seed data and the in-memory directory.

pub mod config;
pub mod contracts;
pub mod error;
pub mod logging;
pub mod memory_store;
pub mod naming;

/// Returns the infra module name for smoke checks.
pub fn module_name() -> &'static str {
    "infra"
}
