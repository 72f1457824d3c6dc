use std::sync::Arc;

use tracing_appender::non_blocking::WorkerGuard;

use crate::{infra::config::AppConfig, registry::SealedRegistry};

#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub registry: Arc<SealedRegistry>,
    _log_guard: Option<WorkerGuard>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        registry: Arc<SealedRegistry>,
        log_guard: Option<WorkerGuard>,
    ) -> Self {
        Self {
            config,
            registry,
            _log_guard: log_guard,
        }
    }
}
