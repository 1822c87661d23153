//! Configuration loading from environment.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use products_hex::DEFAULT_REFRESH_INTERVAL;

/// Output format of the log lines written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    /// JSON settings file holding the `CurrencyExchange` section
    pub settings_path: PathBuf,
    pub refresh_interval: Duration,
    pub log_format: LogFormat,
    /// Set when spans should be exported over OTLP
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = var("PORT").unwrap_or_else(|| "3000".to_string()).parse()?;

        let settings_path = var("SETTINGS_PATH")
            .unwrap_or_else(|| "settings.json".to_string())
            .into();

        let refresh_interval = match var("RATE_REFRESH_INTERVAL_SECS") {
            Some(secs) => {
                let secs: u64 = secs.parse()?;
                if secs == 0 {
                    anyhow::bail!("RATE_REFRESH_INTERVAL_SECS must be greater than zero");
                }
                Duration::from_secs(secs)
            }
            None => DEFAULT_REFRESH_INTERVAL,
        };

        let log_format = match var("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        let otlp_endpoint = var("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|s| !s.is_empty());

        Ok(Self {
            port,
            settings_path,
            refresh_interval,
            log_format,
            otlp_endpoint,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.settings_path, PathBuf::from("settings.json"));
        assert_eq!(config.refresh_interval, Duration::from_secs(3600));
        assert_eq!(config.log_format, LogFormat::Text);
        assert!(config.otlp_endpoint.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("PORT", "8080"),
            ("SETTINGS_PATH", "/etc/products/settings.json"),
            ("RATE_REFRESH_INTERVAL_SECS", "60"),
            ("LOG_FORMAT", "json"),
            ("OTEL_EXPORTER_OTLP_ENDPOINT", "http://collector:4317"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.refresh_interval, Duration::from_secs(60));
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.otlp_endpoint.as_deref(), Some("http://collector:4317"));
    }

    #[test]
    fn test_zero_interval_rejected() {
        assert!(load(&[("RATE_REFRESH_INTERVAL_SECS", "0")]).is_err());
    }

    #[test]
    fn test_bad_port_rejected() {
        assert!(load(&[("PORT", "http")]).is_err());
    }
}
