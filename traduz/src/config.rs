use std::path::Path;
use std::time::Duration;

use figment::Figment;
use figment::providers::{Env, Format as _, Serialized, Toml};
use serde::{Deserialize, Serialize};
use wordreference::Direction;

use crate::consts;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    /// Direction to look words up in when none is given on the command line
    #[serde(default = "default_direction")]
    pub direction: Direction,
    /// HTTP client configuration
    #[serde(default)]
    pub http: HttpConfig,
    /// Tracing configuration
    #[serde(default)]
    pub tracing: TracingConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct HttpConfig {
    /// Base URL of the dictionary website
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Maximum duration of a single request
    #[serde(default = "default_http_timeout", with = "humantime_serde")]
    pub timeout: Duration,
    /// The `User-Agent` header to send
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TracingConfig {
    /// Output format of log lines
    #[serde(default)]
    pub format: Format,
    /// Filter directives, overridden by `RUST_LOG`
    #[serde(default = "default_tracing_filter")]
    pub filter: String,
}

/// The format of log lines written to stderr.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Compact,
    Pretty,
    Json,
}

impl Config {
    /// Loads the configuration from the defaults, then the TOML file at `path` if it exists, then
    /// environment variables prefixed with `TRADUZ_`.
    ///
    /// Nested keys are separated by a double underscore, e.g. `TRADUZ_HTTP__TIMEOUT=10s`.
    pub fn load(path: impl AsRef<Path>) -> Result<Config, figment::Error> {
        Config::figment(path.as_ref()).extract()
    }

    fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(consts::ENV_PREFIX).split("__"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            direction: default_direction(),
            http: HttpConfig::default(),
            tracing: TracingConfig::default(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        HttpConfig {
            base_url: default_base_url(),
            timeout: default_http_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        TracingConfig {
            format: Format::default(),
            filter: default_tracing_filter(),
        }
    }
}

#[must_use]
pub const fn default_direction() -> Direction {
    Direction::ENGLISH_SPANISH
}

#[must_use]
pub fn default_base_url() -> String {
    wordreference::client::BASE_URL.to_string()
}

#[must_use]
pub const fn default_http_timeout() -> Duration {
    consts::HTTP_TIMEOUT
}

#[must_use]
pub fn default_user_agent() -> String {
    consts::HTTP_USER_AGENT.to_string()
}

#[must_use]
pub fn default_tracing_filter() -> String {
    consts::DEFAULT_TRACING_FILTER.to_string()
}
