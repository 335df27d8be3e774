//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `btswitch.toml` in the working directory (or the file named by
//! `BTSWITCH_CONFIG`). Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.

use serde::Deserialize;

use btswitch_adapter_blueutil::BlueutilConfig;
use btswitch_domain::address::HardwareAddress;
use btswitch_domain::device::{Device, DeviceRegistry};
use btswitch_domain::error::BtSwitchError;

const DEFAULT_PATH: &str = "btswitch.toml";

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// How to run `blueutil`.
    pub blueutil: BlueutilConfig,
    /// Managed devices, reported in this order.
    pub devices: Vec<DeviceConfig>,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// One `[[devices]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceConfig {
    pub name: String,
    /// Hardware address, e.g. `A4:C1:38:0E:5B:11`.
    pub address: String,
}

impl Config {
    /// Load configuration from `btswitch.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(env_var)
    }

    /// Same as [`load`](Self::load) but reads variables through `env`.
    fn load_with(env: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let path = env("BTSWITCH_CONFIG").unwrap_or_else(|| DEFAULT_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides(&env);
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(val) = env("BTSWITCH_HOST") {
            self.server.host = val;
        }
        if let Some(val) = env("BTSWITCH_PORT")
            && let Ok(port) = val.parse()
        {
            self.server.port = port;
        }
        if let Some(val) = env("BTSWITCH_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = env("BTSWITCH_BLUEUTIL") {
            self.blueutil.path = val.into();
        }
        self.logging.apply_env_overrides(env);
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        self.registry()?;
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Build the device registry from the `[[devices]]` entries, keeping
    /// their order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Device`] for a blank name, a malformed
    /// address or a duplicated name.
    pub fn registry(&self) -> Result<DeviceRegistry, ConfigError> {
        let devices = self
            .devices
            .iter()
            .map(|entry| {
                let address = HardwareAddress::parse(&entry.address)?;
                Device::new(entry.name.clone(), address)
            })
            .collect::<Result<Vec<_>, BtSwitchError>>()?;
        Ok(DeviceRegistry::new(devices)?)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5151,
        }
    }
}

impl LoggingConfig {
    /// Logging settings from the defaults and the environment alone.
    ///
    /// Used when the config file cannot be loaded, so the failure can still
    /// be logged.
    #[must_use]
    pub fn from_env() -> Self {
        let mut logging = Self::default();
        logging.apply_env_overrides(env_var);
        logging
    }

    fn apply_env_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(val) = env("BTSWITCH_LOG") {
            self.filter = val;
        }
        if let Some(val) = env("RUST_LOG") {
            self.filter = val;
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "btswitchd=info,btswitch=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
    /// A `[[devices]]` entry is invalid.
    #[error("invalid device entry")]
    Device(#[from] BtSwitchError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use btswitch_domain::error::ValidationError;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5151);
        assert_eq!(config.blueutil.path, PathBuf::from("blueutil"));
        assert!(config.blueutil.timeout_secs.is_none());
        assert!(config.devices.is_empty());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 5151);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [logging]
            filter = 'debug'

            [blueutil]
            path = '/usr/local/bin/blueutil'
            timeout_secs = 10

            [[devices]]
            name = 'keyboard'
            address = '00-11-22-33-44-55'

            [[devices]]
            name = 'trackpad'
            address = '66-77-88-99-AA-BB'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(
            config.blueutil.path,
            PathBuf::from("/usr/local/bin/blueutil")
        );
        assert_eq!(config.blueutil.timeout_secs, Some(10));
        assert_eq!(config.devices.len(), 2);
    }

    #[test]
    fn should_build_registry_in_file_order() {
        let toml = "
            [[devices]]
            name = 'trackpad'
            address = '66:77:88:99:AA:BB'

            [[devices]]
            name = 'keyboard'
            address = '00:11:22:33:44:55'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        let registry = config.registry().unwrap();
        let names: Vec<&str> = registry.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["trackpad", "keyboard"]);
    }

    #[test]
    fn should_reject_placeholder_address() {
        let toml = "
            [[devices]]
            name = 'keyboard'
            address = 'XX-XX-XX-XX-XX-XX'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Device(BtSwitchError::Validation(
                ValidationError::InvalidAddress(_)
            )))
        ));
    }

    #[test]
    fn should_reject_duplicate_device_names() {
        let toml = "
            [[devices]]
            name = 'keyboard'
            address = '00:11:22:33:44:55'

            [[devices]]
            name = 'keyboard'
            address = '66:77:88:99:AA:BB'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(matches!(
            config.registry(),
            Err(ConfigError::Device(BtSwitchError::Validation(
                ValidationError::DuplicateName(_)
            )))
        ));
    }

    #[test]
    fn should_reject_device_without_address() {
        let result: Result<Config, _> = toml::from_str(
            "
            [[devices]]
            name = 'keyboard'
            ",
        );
        assert!(result.is_err());
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 5151);
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_format_bind_addr() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:5151");
    }

    #[test]
    fn should_format_custom_bind_addr() {
        let mut config = Config::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 9090;
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_override_server_and_blueutil_from_env() {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[
            ("BTSWITCH_HOST", "10.0.0.1"),
            ("BTSWITCH_PORT", "8080"),
            ("BTSWITCH_BLUEUTIL", "/opt/homebrew/bin/blueutil"),
        ]));
        assert_eq!(config.bind_addr(), "10.0.0.1:8080");
        assert_eq!(
            config.blueutil.path,
            PathBuf::from("/opt/homebrew/bin/blueutil")
        );
    }

    #[test]
    fn should_let_bind_override_host_and_port() {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[
            ("BTSWITCH_HOST", "10.0.0.1"),
            ("BTSWITCH_PORT", "8080"),
            ("BTSWITCH_BIND", "127.0.0.1:6000"),
        ]));
        assert_eq!(config.bind_addr(), "127.0.0.1:6000");
    }

    #[test]
    fn should_ignore_unparsable_port_override() {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[("BTSWITCH_PORT", "not-a-port")]));
        assert_eq!(config.server.port, 5151);
    }

    #[test]
    fn should_prefer_rust_log_over_btswitch_log() {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[("BTSWITCH_LOG", "warn")]));
        assert_eq!(config.logging.filter, "warn");

        config.apply_env_overrides(env(&[("BTSWITCH_LOG", "warn"), ("RUST_LOG", "trace")]));
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_load_file_named_by_btswitch_config() {
        let path = std::env::temp_dir().join(format!(
            "btswitch-config-test-{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "
            [server]
            port = 7070

            [[devices]]
            name = 'keyboard'
            address = '00:11:22:33:44:55'
            ",
        )
        .unwrap();

        let result = Config::load_with(env(&[("BTSWITCH_CONFIG", path.to_str().unwrap())]));
        std::fs::remove_file(&path).unwrap();

        let config = result.unwrap();
        assert_eq!(config.server.port, 7070);
        assert_eq!(config.registry().unwrap().len(), 1);
    }

    #[test]
    fn should_fail_load_when_config_file_is_malformed() {
        let path = std::env::temp_dir().join(format!(
            "btswitch-config-bad-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "invalid {{{").unwrap();

        let result = Config::load_with(env(&[("BTSWITCH_CONFIG", path.to_str().unwrap())]));
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
