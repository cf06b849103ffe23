//! Application-level configuration loading.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "PONGSHOTS_BACK_CONFIG_PATH";
/// Port used when neither the file nor the environment provides one.
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable runtime configuration read once at startup.
pub struct AppConfig {
    /// TCP port the HTTP server binds to on every interface.
    pub port: u16,
}

impl AppConfig {
    /// Load the configuration from disk, then apply `PORT` / `SERVER_PORT` overrides.
    pub fn load() -> Self {
        let path = resolve_config_path();
        let config = match fs::read_to_string(&path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(config) => {
                    info!(path = %path.display(), port = config.port, "loaded config");
                    config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        };

        config.with_port_override(port_from_env())
    }

    fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<RawConfig>(contents).map(Into::into)
    }

    fn with_port_override(self, port: Option<u16>) -> Self {
        match port {
            Some(port) => Self { port },
            None => self,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    #[serde(default)]
    port: Option<u16>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        Self {
            port: value.port.unwrap_or(DEFAULT_PORT),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

fn port_from_env() -> Option<u16> {
    env::var("PORT")
        .or_else(|_| env::var("SERVER_PORT"))
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_default_port() {
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn port_is_read_from_json() {
        let config = AppConfig::from_json(r#"{"port": 9090}"#).unwrap();
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn invalid_port_is_a_parse_error() {
        assert!(AppConfig::from_json(r#"{"port": 70000}"#).is_err());
        assert!(AppConfig::from_json(r#"{"port": "high"}"#).is_err());
    }

    #[test]
    fn environment_port_wins_over_file() {
        let config = AppConfig::from_json(r#"{"port": 9090}"#).unwrap();
        assert_eq!(config.clone().with_port_override(Some(3000)).port, 3000);
        assert_eq!(config.with_port_override(None).port, 9090);
    }
}
