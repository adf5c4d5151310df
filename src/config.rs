use crate::app::AppMode;
use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub mode: AppMode,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup, so tests need not touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = match lookup("APP_MODE") {
            Some(raw) => raw
                .parse::<AppMode>()
                .context("APP_MODE must be 'production' or 'testing'")?,
            None => AppMode::default(),
        };

        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = lookup("SERVICE_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        Ok(Config {
            mode,
            service_port,
            service_host,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Mode: {}", self.mode);
        tracing::info!("  Service listening on: {}", self.bind_address());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_config_with_all_vars() {
        let config = config_from(&[
            ("APP_MODE", "testing"),
            ("SERVICE_PORT", "8080"),
            ("SERVICE_HOST", "127.0.0.1"),
        ])
        .unwrap();

        assert_eq!(config.mode, AppMode::Testing);
        assert_eq!(config.service_port, 8080);
        assert_eq!(config.service_host, "127.0.0.1");
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_config_with_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.mode, AppMode::Production);
        assert_eq!(config.service_port, 3000);
        assert_eq!(config.service_host, "0.0.0.0");
    }

    #[test]
    fn test_invalid_mode() {
        let result = config_from(&[("APP_MODE", "staging")]);
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("APP_MODE"));
    }

    #[test]
    fn test_invalid_port() {
        let result = config_from(&[("SERVICE_PORT", "not-a-number")]);
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("SERVICE_PORT"));
    }

    #[test]
    fn test_port_out_of_range() {
        let result = config_from(&[("SERVICE_PORT", "99999")]);
        assert!(result.is_err());
    }
}
