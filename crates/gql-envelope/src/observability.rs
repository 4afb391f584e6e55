//! Tracing setup for hosts that embed the codec.
//!
//! The library itself only emits events under the `gql_envelope` target
//! (`trace` on success, `debug` on rejected input); it never logs query text
//! or variable values. Hosts with their own subscriber can ignore this module.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

/// Result of the first `init_tracing*` call in this process.
static TRACING_INSTALLED: OnceLock<bool> = OnceLock::new();

const LOG_FORMAT_ENV: &str = "GQL_ENVELOPE_LOG_FORMAT";

/// Subscriber settings. Loadable from a host config file; missing keys take
/// the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directives, e.g. `gql_envelope=debug`.
    pub filter: String,

    /// JSON lines instead of compact text.
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

impl LogConfig {
    /// Defaults overridden by `RUST_LOG` and `GQL_ENVELOPE_LOG_FORMAT=json`.
    pub fn from_env() -> Self {
        Self::default().with_overrides(
            std::env::var(EnvFilter::DEFAULT_ENV).ok(),
            std::env::var(LOG_FORMAT_ENV).ok(),
        )
    }

    fn with_overrides(mut self, filter: Option<String>, format: Option<String>) -> Self {
        if let Some(filter) = filter.filter(|f| !f.trim().is_empty()) {
            self.filter = filter;
        }
        if let Some(format) = format {
            self.json = format.eq_ignore_ascii_case("json");
        }
        self
    }

    /// Unparseable directives fall back to `info` rather than failing startup.
    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.filter).unwrap_or_else(|err| {
            eprintln!("invalid log filter {:?}: {err}", self.filter);
            EnvFilter::new("info")
        })
    }
}

/// Installs a global subscriber configured from the environment.
pub fn init_tracing() -> bool {
    init_tracing_with(LogConfig::from_env())
}

/// Installs a global subscriber once per process. Returns `false` when a
/// subscriber was already in place (ours or the host's); later calls return
/// the first call's result and ignore their config.
pub fn init_tracing_with(config: LogConfig) -> bool {
    *TRACING_INSTALLED.get_or_init(|| {
        let fmt_layer = if config.json {
            fmt::layer().json().boxed()
        } else {
            fmt::layer().compact().boxed()
        };

        tracing_subscriber::registry()
            .with(config.env_filter())
            .with(fmt_layer)
            .try_init()
            .is_ok()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode;

    #[test]
    fn default_config_is_plain_info() {
        let config = LogConfig::default();
        assert_eq!(config.filter, "info");
        assert!(!config.json);
    }

    #[test]
    fn overrides_replace_filter_and_format() {
        let config = LogConfig::default()
            .with_overrides(Some("gql_envelope=trace".into()), Some("JSON".into()));
        assert_eq!(config.filter, "gql_envelope=trace");
        assert!(config.json);
    }

    #[test]
    fn blank_filter_and_unknown_format_keep_defaults() {
        let config = LogConfig::default().with_overrides(Some("  ".into()), Some("pretty".into()));
        assert_eq!(config, LogConfig::default());
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let config: LogConfig = serde_json::from_str(r#"{"json":true}"#).unwrap();
        assert_eq!(config.filter, "info");
        assert!(config.json);
    }

    #[test]
    fn init_is_idempotent_and_codec_still_logs() {
        let first = init_tracing_with(LogConfig {
            filter: "gql_envelope=trace".to_string(),
            json: false,
        });
        assert_eq!(init_tracing(), first);

        assert!(decode(r#"{"query":"{ foo }"}"#).is_ok());
        assert!(decode("not json").is_err());
    }
}
