//! Logging config and setup

mod defaults;
mod log_rotation_kind;
mod parsers;

pub use log_rotation_kind::LogRotationKind;
use schemars::JsonSchema;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Logging related options
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct Logging {
    /// The log level to use for tracing
    #[serde(
        default = "defaults::log_level",
        deserialize_with = "parsers::level"
    )]
    #[schemars(schema_with = "super::schemas::level")]
    pub level: Level,

    /// The directory to write log files to. Logs go to stderr when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Log file rotation period to use when a log path is provided
    /// [default: daily]
    #[serde(default = "defaults::default_rotation")]
    pub rotation: LogRotationKind,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
            path: None,
            rotation: defaults::default_rotation(),
        }
    }
}

impl Logging {
    /// Filter to the configured level, quieting HTTP internals unless debugging
    pub fn env_filter(&self) -> Result<EnvFilter, anyhow::Error> {
        let mut env_filter = EnvFilter::from_default_env().add_directive(self.level.into());

        if self.level == Level::INFO {
            env_filter = env_filter
                .add_directive("reqwest=warn".parse()?)
                .add_directive("hyper_util=warn".parse()?);
        }
        Ok(env_filter)
    }
}

/// Install a global subscriber writing to a rolling log file, or to stderr when no path is set.
///
/// The returned guard must be held for as long as file logs should be flushed.
pub fn setup_logging(logging: &Logging) -> Result<Option<WorkerGuard>, anyhow::Error> {
    let env_filter = logging.env_filter()?;

    if let Some(path) = &logging.path {
        setup_file_logging(path, env_filter, logging.rotation)
    } else {
        setup_stderr_logging(env_filter)
    }
}

/// Sets up rolling file appender logging but falls back to stderr logging on failure
fn setup_file_logging(
    log_path: &Path,
    env_filter: EnvFilter,
    rotation: LogRotationKind,
) -> Result<Option<WorkerGuard>, anyhow::Error> {
    if let Err(error) = std::fs::create_dir_all(log_path) {
        eprintln!("Could not create log directory ({error}) - falling back to stderr");
        return setup_stderr_logging(env_filter);
    }

    let (non_blocking_writer, guard) = match RollingFileAppender::builder()
        .rotation(rotation.into())
        .filename_prefix("graphql_agent_tools")
        .filename_suffix("log")
        .build(log_path)
    {
        Ok(appender) => tracing_appender::non_blocking(appender),
        Err(error) => {
            eprintln!("Log file setup failed ({error}) - falling back to stderr");
            return setup_stderr_logging(env_filter);
        }
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_writer)
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()?;

    Ok(Some(guard))
}

/// Sets up stderr logging
fn setup_stderr_logging(env_filter: EnvFilter) -> Result<Option<WorkerGuard>, anyhow::Error> {
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true)
                .with_target(false),
        )
        .try_init()?;

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_info_on_stderr() {
        let logging: Logging = serde_json::from_str("{}").unwrap();

        assert_eq!(logging.level, Level::INFO);
        assert_eq!(logging.path, None);
        assert_eq!(logging.rotation, LogRotationKind::Daily);
    }

    #[test]
    fn parses_level_names() {
        let logging: Logging =
            serde_json::from_str(r#"{ "level": "debug", "rotation": "never" }"#).unwrap();

        assert_eq!(logging.level, Level::DEBUG);
        assert_eq!(logging.rotation, LogRotationKind::Never);
    }

    #[test]
    fn rejects_unknown_levels() {
        assert!(serde_json::from_str::<Logging>(r#"{ "level": "loud" }"#).is_err());
    }
}
