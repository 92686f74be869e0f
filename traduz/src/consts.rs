use std::time::Duration;

/// The path of the configuration file that is read when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "traduz.toml";

/// The prefix of environment variables that override configuration values.
pub const ENV_PREFIX: &str = "TRADUZ_";

/// The `User-Agent` header to send when issuing HTTP requests.
pub const HTTP_USER_AGENT: &str = wordreference::client::USER_AGENT;

/// The duration before a HTTP request times out.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// The default filter directives when `RUST_LOG` is not set.
pub const DEFAULT_TRACING_FILTER: &str = "traduz=info,wordreference=warn";
