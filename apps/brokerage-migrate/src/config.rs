//! Layered configuration: defaults, then an optional YAML file, then environment

use crate::logging::LoggingConfig;
use anyhow::{Context, Result};
use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use serde::Deserialize;
use std::path::Path;

/// Environment prefix; nested keys are separated by `__`,
/// e.g. `BROKERAGE__BROKERAGE__DATABASE__URL`.
pub const ENV_PREFIX: &str = "BROKERAGE__";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub brokerage: brokerage_service::Config,
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            anyhow::ensure!(path.exists(), "config file {} not found", path.display());
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment
            .extract()
            .context("Invalid brokerage-migrate configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogFormat;
    use std::io::Write;
    use std::time::Duration;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg = AppConfig::load(None).unwrap();
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.logging.format, LogFormat::Pretty);
        assert!(cfg.brokerage.run_migrations);
        assert!(cfg.brokerage.database.is_sqlite_memory());
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "logging:\n  level: debug\n  format: json\nbrokerage:\n  run_migrations: false\n  database:\n    url: postgres://brokerage@localhost/brokerage\n    max_connections: 3\n    connect_timeout: 750ms\n"
        )
        .unwrap();

        let cfg = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(cfg.logging.format, LogFormat::Json);
        assert!(!cfg.brokerage.run_migrations);
        assert_eq!(cfg.brokerage.database.max_connections, 3);
        assert_eq!(
            cfg.brokerage.database.connect_timeout,
            Duration::from_millis(750)
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "brokerage:\n  database:\n    hostname: db\n").unwrap();

        assert!(AppConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "logging:\n  format: fancy\n").unwrap();

        assert!(AppConfig::load(Some(file.path())).is_err());

        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "logging:\n  format: compact\n").unwrap();

        let cfg = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(cfg.logging.format, LogFormat::Compact);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(AppConfig::load(Some(Path::new("/nonexistent/brokerage.yaml"))).is_err());
    }
}
