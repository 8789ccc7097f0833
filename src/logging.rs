//! File-backed `tracing` setup.

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{Config, ConfigError};

/// Installs the global subscriber, appending plain-text events to `config.log_path`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init(config: &Config) -> Result<(), ConfigError> {
    let file = open_log_file(&config.log_path)?;
    let filter = build_filter(&config.log_filter)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()?;
    Ok(())
}

/// Parses a filter directive such as `contact_form=debug`.
pub fn build_filter(directive: &str) -> Result<EnvFilter, ConfigError> {
    Ok(EnvFilter::try_new(directive)?)
}

/// Opens `path` for appending, creating missing parent directories.
pub fn open_log_file(path: &Path) -> Result<File, ConfigError> {
    let log_err = |source| ConfigError::LogFile {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(log_err)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(log_err)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::config::DEFAULT_LOG_FILTER;

    #[test]
    fn open_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("form.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn open_appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("form.log");
        fs::write(&path, "first\n").unwrap();
        let mut file = open_log_file(&path).unwrap();
        writeln!(file, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn open_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let result = open_log_file(&blocker.join("form.log"));
        assert!(matches!(result, Err(ConfigError::LogFile { .. })));
    }

    #[test]
    fn default_filter_parses() {
        assert!(build_filter(DEFAULT_LOG_FILTER).is_ok());
    }

    #[test]
    fn invalid_filter_is_rejected() {
        let result = build_filter("contact_form=notalevel[");
        assert!(matches!(result, Err(ConfigError::Filter(_))));
    }

    #[test]
    fn level_only_filter_parses() {
        assert!(build_filter("debug").is_ok());
    }
}
