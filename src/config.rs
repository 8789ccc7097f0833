//! Runtime configuration read from the environment.

use std::path::PathBuf;

/// Environment variable overriding the log file path.
pub const LOG_PATH_VAR: &str = "CONTACT_FORM_LOG";
/// Environment variable holding a `tracing` filter directive.
pub const LOG_LEVEL_VAR: &str = "CONTACT_FORM_LOG_LEVEL";
/// Filter used when [`LOG_LEVEL_VAR`] is unset or blank.
pub const DEFAULT_LOG_FILTER: &str = "contact_form=info";

const APP_DIR: &str = "contact-form";
const LOG_FILE_NAME: &str = "contact-form.log";

/// Errors that can occur while loading configuration or starting logging.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The platform does not provide a data directory and no override was set.
    #[error("could not determine XDG data directory")]
    NoDataDir,

    /// The log file or its parent directory could not be created.
    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The log filter directive did not parse.
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// A global `tracing` subscriber was already installed.
    #[error("logging already initialised: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where `tracing` output is written. The terminal belongs to the UI.
    pub log_path: PathBuf,
    /// `EnvFilter` directive, e.g. `contact_form=debug`.
    pub log_filter: String,
}

impl Config {
    /// Loads configuration from the process environment and XDG data directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok(), dirs::data_dir())
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// `data_dir` is only consulted when no log path override is present.
    pub fn from_lookup<F>(lookup: F, data_dir: Option<PathBuf>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let log_path = match non_blank(LOG_PATH_VAR) {
            Some(path) => PathBuf::from(path),
            None => data_dir
                .ok_or(ConfigError::NoDataDir)?
                .join(APP_DIR)
                .join(LOG_FILE_NAME),
        };
        let log_filter = non_blank(LOG_LEVEL_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.into());

        Ok(Self {
            log_path,
            log_filter,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_use_data_dir() {
        let config =
            Config::from_lookup(lookup_from(&[]), Some(PathBuf::from("/data"))).unwrap();
        assert_eq!(
            config.log_path,
            PathBuf::from("/data/contact-form/contact-form.log")
        );
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn log_path_override() {
        let config = Config::from_lookup(
            lookup_from(&[(LOG_PATH_VAR, "/tmp/form.log")]),
            Some(PathBuf::from("/data")),
        )
        .unwrap();
        assert_eq!(config.log_path, PathBuf::from("/tmp/form.log"));
    }

    #[test]
    fn log_path_override_needs_no_data_dir() {
        let config =
            Config::from_lookup(lookup_from(&[(LOG_PATH_VAR, "/tmp/form.log")]), None).unwrap();
        assert_eq!(config.log_path, PathBuf::from("/tmp/form.log"));
    }

    #[test]
    fn log_level_override() {
        let config = Config::from_lookup(
            lookup_from(&[(LOG_LEVEL_VAR, "contact_form=trace")]),
            Some(PathBuf::from("/data")),
        )
        .unwrap();
        assert_eq!(config.log_filter, "contact_form=trace");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = Config::from_lookup(
            lookup_from(&[(LOG_PATH_VAR, "  "), (LOG_LEVEL_VAR, "")]),
            Some(PathBuf::from("/data")),
        )
        .unwrap();
        assert_eq!(
            config.log_path,
            PathBuf::from("/data/contact-form/contact-form.log")
        );
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn missing_data_dir_is_an_error() {
        let result = Config::from_lookup(lookup_from(&[]), None);
        assert!(matches!(result, Err(ConfigError::NoDataDir)));
    }
}
