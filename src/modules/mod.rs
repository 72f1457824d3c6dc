//! Feature modules and their datasource adapters.
//!
//! Each module exposes a `register` function that receives the registry by
//! reference and submits its descriptor. [`register_all`] wires them in a
//! fixed order.

pub mod friend;
pub mod projection;
pub mod user;
pub mod user_manager;

use std::sync::Arc;

use tracing::info;

use crate::{
    domain::services::{DeviceRepository, FriendService, UserService},
    infra::config::ModulesConfig,
    registry::{DatasourceResult, ModuleRegistry},
};

/// Live handles on the domain services the adapters read through.
#[derive(Clone)]
pub struct DomainServices {
    pub users: Arc<dyn UserService>,
    pub friends: Arc<dyn FriendService>,
    pub devices: Arc<dyn DeviceRepository>,
}

impl DomainServices {
    /// One backend serving all three contracts.
    pub fn shared<T>(backend: Arc<T>) -> Self
    where
        T: UserService + FriendService + DeviceRepository + 'static,
    {
        Self {
            users: backend.clone(),
            friends: backend.clone(),
            devices: backend,
        }
    }
}

/// Registers every module not disabled in `config`, in the order
/// `user`, `friend`, `user_manager`.
pub fn register_all(
    registry: &mut ModuleRegistry,
    services: &DomainServices,
    config: &ModulesConfig,
) -> DatasourceResult<()> {
    if config.is_enabled(user::MODULE_NAME) {
        user::register(registry, services)?;
    }
    if config.is_enabled(friend::MODULE_NAME) {
        friend::register(registry, services)?;
    }
    if config.is_enabled(user_manager::MODULE_NAME) {
        user_manager::register(registry)?;
    }

    for name in &config.disabled {
        info!(module = name.as_str(), "module disabled by config");
    }

    Ok(())
}

/// Returns the modules module name for smoke checks.
pub fn module_name() -> &'static str {
    "modules"
}
