//! Use case layer: start-up wiring and registry queries.

pub mod bootstrap;
pub mod context;
pub mod query;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
