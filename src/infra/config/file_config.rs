use std::path::PathBuf;

use serde::Deserialize;

use crate::infra::config::{AppConfig, DatasourceConfig, LogConfig, ModulesConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub datasource: Option<FileDatasourceConfig>,
    pub modules: Option<FileModulesConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(datasource) = self.datasource {
            datasource.merge_into(&mut config.datasource);
        }

        if let Some(modules) = self.modules {
            modules.merge_into(&mut config.modules);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }

        if let Some(file) = self.file {
            config.file = Some(file);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileDatasourceConfig {
    pub seed_path: Option<PathBuf>,
}

impl FileDatasourceConfig {
    fn merge_into(self, config: &mut DatasourceConfig) {
        if let Some(seed_path) = self.seed_path {
            config.seed_path = Some(seed_path);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileModulesConfig {
    pub disabled: Option<Vec<String>>,
}

impl FileModulesConfig {
    fn merge_into(self, config: &mut ModulesConfig) {
        if let Some(disabled) = self.disabled {
            config.disabled = disabled;
        }
    }
}
