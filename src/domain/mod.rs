//! Domain layer: records, neutral descriptors and service contracts.

pub mod channel;
pub mod device;
pub mod friend;
pub mod services;
pub mod user;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
