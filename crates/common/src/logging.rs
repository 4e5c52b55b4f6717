//! Provides utilities to initialize logging.
//!
//! Logs go to stderr so that commands can print machine-readable output on
//! stdout.
use std::{env, io};

use tracing::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable name for the service label, which is appended to the
/// whoami string.
pub const SVC_LABEL_ENVVAR: &str = "HDAUTH_SVC_LABEL";

/// Directive used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Configuration for the logger.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// The whoami string, which is used to identify the process in logs.
    whoami: String,

    /// Filter directive applied when `RUST_LOG` is not set.
    default_filter: String,
}

impl LoggerConfig {
    /// Creates a new instance with whoami set and the default filter.
    pub fn new(whoami: String) -> Self {
        Self {
            whoami,
            default_filter: DEFAULT_FILTER.to_owned(),
        }
    }

    /// Creates a new instance with the whoami string derived from the
    /// provided base name.
    pub fn with_base_name(s: &str) -> Self {
        Self::new(get_whoami_string(s))
    }

    /// Sets the filter directive used when `RUST_LOG` is not set.
    pub fn set_default_filter(&mut self, directive: impl Into<String>) {
        self.default_filter = directive.into();
    }

    /// The whoami string.
    pub fn whoami(&self) -> &str {
        &self.whoami
    }

    /// Builds the env filter, preferring `RUST_LOG` over the default directive.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.default_filter))
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::with_base_name("(hdauth)")
    }
}

/// Initializes the logging subsystem with the provided config.
pub fn init(config: LoggerConfig) {
    let log_file = env::var("LOG_FILE").is_ok_and(|v| v == "1");
    let log_line_num = env::var("LOG_LINE_NUM").is_ok_and(|v| v == "1");

    let stderr_sub = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(io::stderr)
        .event_format(
            tracing_subscriber::fmt::format()
                .with_file(log_file)
                .with_line_number(log_line_num),
        )
        .with_filter(config.env_filter());

    tracing_subscriber::registry().with(stderr_sub).init();

    debug!(whoami = %config.whoami, "logging started");
}

/// Gets the service label from the standard envvar, which should be included
/// in the whoami string.
pub fn get_service_label_from_env() -> Option<String> {
    env::var(SVC_LABEL_ENVVAR).ok()
}

/// Computes a standard whoami string.
pub fn get_whoami_string(base: &str) -> String {
    match get_service_label_from_env() {
        Some(label) => format!("{base}%{label}"),
        None => base.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_override() {
        let mut config = LoggerConfig::new("test".to_owned());
        assert_eq!(config.default_filter, DEFAULT_FILTER);

        config.set_default_filter("hdauth_key_deriv=debug");
        assert_eq!(config.default_filter, "hdauth_key_deriv=debug");
        assert_eq!(config.whoami(), "test");
    }
}
