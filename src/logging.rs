//! Tracing setup.
//!
//! The terminal belongs to the UI, so log output goes to a file. Logging is
//! opt-in: nothing is installed unless a filter is configured (`SNIFF_LOG`).

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{SniffError, SniffResult};

/// `<cache dir>/sniff/sniff.log`, or the temp dir when there is no cache dir.
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("sniff")
        .join("sniff.log")
}

/// Install the global subscriber if `filter` is set. Returns the log path.
pub fn init_logging(filter: Option<&str>) -> SniffResult<Option<PathBuf>> {
    let Some(filter) = filter else {
        return Ok(None);
    };
    let path = default_log_path();
    init_logging_at(filter, &path)?;
    Ok(Some(path))
}

/// Install the global subscriber writing to `path` (appending).
pub fn init_logging_at(filter: &str, path: &Path) -> SniffResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let env_filter = EnvFilter::try_new(filter).map_err(|e| SniffError::Config {
        variable: "SNIFF_LOG".to_string(),
        message: e.to_string(),
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| SniffError::Io(io::Error::other(e.to_string())))?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_filter_installs_nothing() {
        assert!(init_logging(None).unwrap().is_none());
    }

    #[test]
    fn test_default_path_ends_with_log_file() {
        let path = default_log_path();
        assert!(path.ends_with("sniff/sniff.log"));
    }

    #[test]
    fn test_bad_filter_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = init_logging_at("sniff=loud", &dir.path().join("x.log")).unwrap_err();
        assert!(matches!(err, SniffError::Config { .. }));
    }

    #[test]
    fn test_writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("sniff.log");

        init_logging_at("debug", &path).unwrap();
        tracing::info!("hello from test");

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("logging initialized"));
        assert!(contents.contains("hello from test"));
    }
}
