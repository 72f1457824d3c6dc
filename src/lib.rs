//! Feature-module registry and datasource adapters for an instant-messaging core.
//!
//! Feature modules (`user`, `friend`, `user_manager`) register a
//! [`ModuleDescriptor`](registry::ModuleDescriptor) on a
//! [`ModuleRegistry`](registry::ModuleRegistry) at start-up. The sealed
//! registry then answers identity, visibility, channel, device and friend
//! queries on behalf of the messaging core.

pub mod app;
pub mod cli;
pub mod domain;
pub mod infra;
pub mod modules;
pub mod registry;
#[cfg(test)]
mod test_support;
pub mod usecases;
