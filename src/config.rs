use std::net::SocketAddr;

use anyhow::Context;

const DEFAULT_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SERVICE_NAME: &str = "customer-service";
const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime settings, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// `CUSTOMER_SERVICE_ADDR`
    pub bind_addr: SocketAddr,
    /// `OTEL_SERVICE_NAME`
    pub service_name: String,
    /// `CUSTOMER_SERVICE_LOG`, used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Set when `OTEL_EXPORTER_OTLP_ENDPOINT` is present.
    pub otlp_enabled: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let addr = lookup("CUSTOMER_SERVICE_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_owned());
        let bind_addr = addr
            .parse()
            .with_context(|| format!("Invalid CUSTOMER_SERVICE_ADDR: {addr}"))?;

        Ok(Self {
            bind_addr,
            service_name: lookup("OTEL_SERVICE_NAME")
                .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_owned()),
            log_filter: lookup("CUSTOMER_SERVICE_LOG")
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned()),
            otlp_enabled: lookup("OTEL_EXPORTER_OTLP_ENDPOINT").is_some_and(|v| !v.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.service_name, "customer-service");
        assert_eq!(config.log_filter, "info");
        assert!(!config.otlp_enabled);
    }

    #[test]
    fn overrides() {
        let config = config(&[
            ("CUSTOMER_SERVICE_ADDR", "127.0.0.1:3000"),
            ("OTEL_SERVICE_NAME", "customers"),
            ("CUSTOMER_SERVICE_LOG", "debug"),
            ("OTEL_EXPORTER_OTLP_ENDPOINT", "http://localhost:4317"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.service_name, "customers");
        assert_eq!(config.log_filter, "debug");
        assert!(config.otlp_enabled);
    }

    #[test]
    fn rejects_bad_address() {
        let err = config(&[("CUSTOMER_SERVICE_ADDR", "nowhere")]).unwrap_err();
        assert!(err.to_string().contains("CUSTOMER_SERVICE_ADDR"));
    }
}
