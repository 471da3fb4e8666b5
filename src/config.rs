//! Runtime configuration.
//!
//! Nothing here is needed to run: every value has a default. A handful of
//! environment variables tune the capture handle and logging.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `SNIFF_SNAPLEN` | 1600 | bytes kept per packet |
//! | `SNIFF_PROMISC` | false | promiscuous mode |
//! | `SNIFF_TIMEOUT_MS` | 250 | read timeout, bounds stop latency |
//! | `SNIFF_LOG` | unset | tracing filter; enables the log file |

use crate::error::{SniffError, SniffResult};

pub const DEFAULT_SNAPLEN: i32 = 1600;
pub const DEFAULT_READ_TIMEOUT_MS: i32 = 250;

/// Placeholder shown in the empty filter field.
pub const FILTER_PLACEHOLDER: &str = "tcp and port 80";

/// Maximum filter length accepted by the editor.
pub const FILTER_CHAR_LIMIT: usize = 156;

/// Settings for opening a capture handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureConfig {
    /// Maximum bytes captured per packet
    pub snaplen: i32,
    /// Put the interface in promiscuous mode
    pub promiscuous: bool,
    /// Read timeout in milliseconds. The worker checks for a stop request
    /// between reads, so this is the upper bound on stop latency.
    pub read_timeout_ms: i32,
    /// Deliver packets as soon as they arrive instead of batching
    pub immediate_mode: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            snaplen: DEFAULT_SNAPLEN,
            promiscuous: false,
            read_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
            immediate_mode: true,
        }
    }
}

impl CaptureConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snaplen(mut self, snaplen: i32) -> Self {
        self.snaplen = snaplen;
        self
    }

    pub fn with_promiscuous(mut self, promiscuous: bool) -> Self {
        self.promiscuous = promiscuous;
        self
    }

    pub fn with_read_timeout_ms(mut self, timeout_ms: i32) -> Self {
        self.read_timeout_ms = timeout_ms;
        self
    }

    pub fn with_immediate_mode(mut self, immediate: bool) -> Self {
        self.immediate_mode = immediate;
        self
    }

    /// Build from `SNIFF_*` environment variables, falling back to defaults.
    pub fn from_env() -> SniffResult<Self> {
        let mut config = Self::default();

        if let Some(value) = read_var("SNIFF_SNAPLEN") {
            let snaplen = parse_positive("SNIFF_SNAPLEN", &value)?;
            config = config.with_snaplen(snaplen);
        }
        if let Some(value) = read_var("SNIFF_PROMISC") {
            config = config.with_promiscuous(parse_bool("SNIFF_PROMISC", &value)?);
        }
        if let Some(value) = read_var("SNIFF_TIMEOUT_MS") {
            let timeout = parse_positive("SNIFF_TIMEOUT_MS", &value)?;
            config = config.with_read_timeout_ms(timeout);
        }

        Ok(config)
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub capture: CaptureConfig,
    /// Tracing filter directive; logging is off when `None`.
    pub log_filter: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> SniffResult<Self> {
        Ok(Self {
            capture: CaptureConfig::from_env()?,
            log_filter: read_var("SNIFF_LOG"),
        })
    }
}

fn read_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_positive(variable: &str, value: &str) -> SniffResult<i32> {
    match value.parse::<i32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(SniffError::Config {
            variable: variable.to_string(),
            message: format!("expected a positive integer, got '{}'", value),
        }),
    }
}

fn parse_bool(variable: &str, value: &str) -> SniffResult<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(SniffError::Config {
            variable: variable.to_string(),
            message: format!("expected a boolean, got '{}'", value),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for var in ["SNIFF_SNAPLEN", "SNIFF_PROMISC", "SNIFF_TIMEOUT_MS", "SNIFF_LOG"] {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_defaults() {
        let config = CaptureConfig::default();
        assert_eq!(config.snaplen, 1600);
        assert!(!config.promiscuous);
        assert_eq!(config.read_timeout_ms, 250);
        assert!(config.immediate_mode);
    }

    #[test]
    fn test_builder_chain() {
        let config = CaptureConfig::new()
            .with_snaplen(65535)
            .with_promiscuous(true)
            .with_read_timeout_ms(50)
            .with_immediate_mode(false);
        assert_eq!(config.snaplen, 65535);
        assert!(config.promiscuous);
        assert_eq!(config.read_timeout_ms, 50);
        assert!(!config.immediate_mode);
    }

    #[test]
    #[serial]
    fn test_from_env_defaults_when_unset() {
        clear_env();
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.capture, CaptureConfig::default());
        assert!(config.log_filter.is_none());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("SNIFF_SNAPLEN", "9000");
        std::env::set_var("SNIFF_PROMISC", "yes");
        std::env::set_var("SNIFF_TIMEOUT_MS", "100");
        std::env::set_var("SNIFF_LOG", "sniff=debug");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.capture.snaplen, 9000);
        assert!(config.capture.promiscuous);
        assert_eq!(config.capture.read_timeout_ms, 100);
        assert_eq!(config.log_filter.as_deref(), Some("sniff=debug"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_garbage() {
        clear_env();
        std::env::set_var("SNIFF_SNAPLEN", "-3");
        let err = CaptureConfig::from_env().unwrap_err();
        assert!(matches!(err, SniffError::Config { ref variable, .. } if variable == "SNIFF_SNAPLEN"));

        clear_env();
        std::env::set_var("SNIFF_PROMISC", "maybe");
        assert!(CaptureConfig::from_env().is_err());
        clear_env();
    }
}
