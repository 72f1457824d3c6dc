use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub datasource: DatasourceConfig,
    pub modules: ModulesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    /// Also write logs to this file when set.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DatasourceConfig {
    /// TOML dataset loaded into the in-memory directory. Empty directory when unset.
    pub seed_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ModulesConfig {
    /// Names of feature modules that are not registered.
    pub disabled: Vec<String>,
}

impl ModulesConfig {
    pub fn is_enabled(&self, name: &str) -> bool {
        !self.disabled.iter().any(|disabled| disabled == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_module_is_enabled_by_default() {
        let config = ModulesConfig::default();

        assert!(config.is_enabled("user"));
        assert!(config.is_enabled("friend"));
    }

    #[test]
    fn disabled_names_match_exactly() {
        let config = ModulesConfig {
            disabled: vec!["friend".to_owned()],
        };

        assert!(!config.is_enabled("friend"));
        assert!(config.is_enabled("friends"));
    }
}
