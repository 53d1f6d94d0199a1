//! Optional TOML configuration for the driver binary.

use serde::{Deserialize, Serialize};

/// The driver's configuration, loaded from an optional `--config` TOML file.
///
/// Every field has a sensible default, matching the teacher's pattern of a `Config` struct
/// that's only ever partially filled in by the user: `align` runs perfectly well with no
/// configuration file at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging configuration (`[logging]` section).
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging configuration (`[logging]` section).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// The `tracing`/`EnvFilter` directive to install when `RUST_LOG` isn't set, e.g.
    /// `"info"` or `"align_engine=debug"`.
    pub default_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            default_filter: "info".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_info_level_logging() {
        let config = Config::default();
        assert_eq!(config.logging.default_filter, "info");
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }
}
