use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::infra::{
    config::{file_config::FileConfig, AppConfig},
    error::AppError,
};

const DEFAULT_CONFIG_PATH: &str = "imreg.toml";

pub fn load(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let mut config = AppConfig::default();

    if !config_path.exists() {
        return Ok(config);
    }

    let raw = fs::read_to_string(&config_path).map_err(|source| AppError::ConfigRead {
        path: config_path.clone(),
        source,
    })?;

    let file_config: FileConfig = toml::from_str(&raw).map_err(|source| AppError::ConfigParse {
        path: config_path,
        source,
    })?;

    file_config.merge_into(&mut config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("must create temp config");
        file.write_all(contents.as_bytes())
            .expect("must write test config");
        file
    }

    #[test]
    fn returns_defaults_when_file_is_missing() {
        let config = load(Some(Path::new("./missing-config.toml"))).expect("config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn merges_file_values_over_defaults() {
        let file = write_config(
            r#"[logging]
level = "debug"

[datasource]
seed_path = "data/seed.toml"

[modules]
disabled = ["user_manager"]
"#,
        );

        let config = load(Some(file.path())).expect("config must load");

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, None);
        assert_eq!(
            config.datasource.seed_path,
            Some(PathBuf::from("data/seed.toml"))
        );
        assert_eq!(config.modules.disabled, vec!["user_manager"]);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let file = write_config("[logging]\nfile = \"imreg.log\"\n");

        let config = load(Some(file.path())).expect("config must load");

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file, Some(PathBuf::from("imreg.log")));
        assert!(config.modules.disabled.is_empty());
    }

    #[test]
    fn reports_parse_errors_with_path() {
        let file = write_config("[modules]\ndisabled = \"friend\"\n");

        let err = load(Some(file.path())).expect_err("wrong type must fail");

        assert!(matches!(err, AppError::ConfigParse { ref path, .. } if path == file.path()));
    }
}
