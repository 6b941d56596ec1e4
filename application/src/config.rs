//! [`Config`]-related definitions.

use std::time;

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use service::{domain::board, infra::http};
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Server configuration.
    pub server: Server,

    /// Board configuration.
    pub board: Board,

    /// Deals backend configuration.
    pub backend: Backend,

    /// Service tasks configuration.
    pub tasks: Tasks,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }

    /// Returns the [`service::Config`] described by this [`Config`].
    #[must_use]
    pub fn service(&self) -> service::Config {
        let Tasks { sync_deals } = self.tasks;
        service::Config {
            board: self.board.into(),
            sync_deals: sync_deals.enabled.then_some(
                service::task::sync_deals::Config {
                    interval: sync_deals.interval,
                },
            ),
            ..service::Config::default()
        }
    }
}

/// Server configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Server {
    /// Host to bind the server to.
    #[default("0.0.0.0".to_owned())]
    pub host: String,

    /// Port to bind the server to.
    #[default(8080)]
    pub port: u16,

    /// [CORS] configuration.
    ///
    /// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
    pub cors: Cors,
}

/// [CORS] configuration.
///
/// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Cors {
    /// List of allowed origins.
    #[default(vec!["*".to_owned()])]
    pub origins: Vec<String>,
}

/// Board configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Board {
    /// Distance (in pixels) the pointer must travel after a press before a
    /// drag starts.
    #[default(8.0)]
    pub activation_distance: f64,

    /// Number of characters a card address is truncated to.
    #[default(30)]
    pub address_max_len: usize,

    /// Handling of deals with an unrecognized status.
    pub unrecognized: Unrecognized,
}

impl From<Board> for board::Config {
    fn from(value: Board) -> Self {
        let Board {
            activation_distance,
            address_max_len,
            unrecognized,
        } = value;
        Self {
            activation_distance,
            address_max_len,
            unrecognized: match unrecognized {
                Unrecognized::Drop => board::UnrecognizedPolicy::Drop,
                Unrecognized::Column => board::UnrecognizedPolicy::Column,
            },
        }
    }
}

/// Handling of deals with an unrecognized status.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unrecognized {
    /// Deals are not rendered at all.
    #[default]
    Drop,

    /// Deals are rendered in a trailing column.
    Column,
}

/// Deals backend configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Backend {
    /// Base URL of the deals REST API.
    #[default(http::DEFAULT_BASE_URL.to_owned())]
    pub base_url: String,

    /// Timeout of a single request to the deals REST API.
    #[default(time::Duration::from_secs(10))]
    #[serde(with = "humantime_serde")]
    pub timeout: time::Duration,
}

impl TryFrom<Backend> for http::Config {
    type Error = http::UrlParseError;

    fn try_from(value: Backend) -> Result<Self, Self::Error> {
        let Backend { base_url, timeout } = value;
        Ok(Self {
            base_url: base_url.parse()?,
            timeout,
        })
    }
}

/// Service tasks configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Tasks {
    /// `SyncDeals` task configuration.
    pub sync_deals: Task,
}

/// Service task configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Task {
    /// Indicator whether the task is run.
    #[default(true)]
    pub enabled: bool,

    /// Task execution interval.
    #[default(time::Duration::from_secs(30))]
    #[serde(with = "humantime_serde")]
    pub interval: time::Duration,
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use service::domain::board;

    use super::Config;

    #[test]
    fn defaults_match_service_defaults() {
        let conf = Config::default();

        let service = conf.service();

        assert!((service.board.activation_distance - 8.0).abs() < f64::EPSILON);
        assert_eq!(service.board.address_max_len, 30);
        assert_eq!(service.board.unrecognized, board::UnrecognizedPolicy::Drop);
        assert_eq!(
            service.sync_deals.map(|c| c.interval.as_secs()),
            Some(30),
        );
    }

    #[test]
    fn disables_sync() {
        let mut conf = Config::default();
        conf.tasks.sync_deals.enabled = false;

        assert!(conf.service().sync_deals.is_none());
    }

    #[test]
    fn parses_backend_url() {
        let conf = Config::default();

        let http: service::infra::http::Config =
            conf.backend.try_into().unwrap();

        assert_eq!(http.base_url.as_str(), "http://127.0.0.1:8081/api/");
    }
}
