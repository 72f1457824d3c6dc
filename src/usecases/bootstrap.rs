use std::{path::Path, sync::Arc};

use tracing::warn;

use crate::{
    infra::{
        self,
        config::{DatasourceConfig, FileConfigAdapter, ModulesConfig},
        contracts::ConfigAdapter,
        error::AppError,
        memory_store::MemoryDirectory,
        naming::NicknamePool,
    },
    modules::{self, DomainServices},
    registry::{ModuleRegistry, SealedRegistry},
    usecases::context::AppContext,
};

/// Loads config, installs logging, then registers and seals every enabled module.
pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let config = FileConfigAdapter::new(config_path).load()?;
    let log_guard = infra::logging::init(&config.logging)?;

    let services = build_services(&config.datasource)?;
    let registry = build_registry(&services, &config.modules)?;

    Ok(AppContext::new(config, registry, log_guard))
}

fn build_services(config: &DatasourceConfig) -> Result<DomainServices, AppError> {
    let nicknames = NicknamePool::embedded();
    let directory = match &config.seed_path {
        Some(path) => MemoryDirectory::load(path, &nicknames)?,
        None => {
            warn!("no seed data configured, starting with an empty directory");
            MemoryDirectory::default()
        }
    };

    Ok(DomainServices::shared(Arc::new(directory)))
}

fn build_registry(
    services: &DomainServices,
    config: &ModulesConfig,
) -> Result<Arc<SealedRegistry>, AppError> {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, services, config)?;

    Ok(Arc::new(registry.seal()))
}
