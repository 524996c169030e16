//! Application configuration.
//!
//! Defaults come from [`AppConfig::default`], are overridden by environment
//! variables in [`AppConfig::from_env`], and finally by CLI flags in
//! [`AppConfig::apply_args`].

use std::fmt;
use std::time::Duration;

use crate::cli::CliOptions;
use crate::graphql::{DEFAULT_CACHE_MAX_BYTES, DEFAULT_ENDPOINT};

/// Environment variable overriding the GraphQL endpoint.
pub const ENV_ENDPOINT: &str = "GRAPHQLCONF_ENDPOINT";
/// Environment variable setting a request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "GRAPHQLCONF_TIMEOUT_SECS";
/// Environment variable holding a tracing filter directive.
pub const ENV_LOG: &str = "GRAPHQLCONF_LOG";

/// Default tracing filter.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// An environment value that could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEnvValue {
    pub variable: &'static str,
    pub value: String,
}

impl fmt::Display for RejectedEnvValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ignoring invalid {}={:?}", self.variable, self.value)
    }
}

/// Configuration for a client run.
///
/// # Example
///
/// ```ignore
/// use graphqlconf::startup::AppConfig;
///
/// let config = AppConfig::default()
///     .with_endpoint("http://localhost:4000/graphql")
///     .with_request_timeout(Some(std::time::Duration::from_secs(10)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// GraphQL endpoint URL
    pub endpoint: String,
    /// Overall request timeout; `None` keeps the HTTP client's defaults
    pub request_timeout: Option<Duration>,
    /// Response cache budget in bytes (0 disables the cache)
    pub cache_max_bytes: usize,
    /// `tracing` filter directive
    pub log_filter: String,
    /// Whether to write a log file at all
    pub log_to_file: bool,
    /// Environment values skipped while building this config
    pub rejected: Vec<RejectedEnvValue>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout: None,
            cache_max_bytes: DEFAULT_CACHE_MAX_BYTES,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_to_file: true,
            rejected: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the GraphQL endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the request timeout.
    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the response cache budget.
    pub fn with_cache_max_bytes(mut self, bytes: usize) -> Self {
        self.cache_max_bytes = bytes;
        self
    }

    /// Set the tracing filter directive.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Enable or disable the log file.
    pub fn with_log_to_file(mut self, enabled: bool) -> Self {
        self.log_to_file = enabled;
        self
    }

    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by `lookup`, which maps variable names to values.
    ///
    /// Blank values are ignored. Unparseable values are ignored and recorded
    /// in [`AppConfig::rejected`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(endpoint) = non_blank(ENV_ENDPOINT) {
            config.endpoint = endpoint.trim().to_string();
        }
        if let Some(raw) = non_blank(ENV_TIMEOUT_SECS) {
            match parse_timeout_secs(&raw) {
                Some(timeout) => config.request_timeout = Some(timeout),
                None => config.rejected.push(RejectedEnvValue {
                    variable: ENV_TIMEOUT_SECS,
                    value: raw,
                }),
            }
        }
        if let Some(filter) = non_blank(ENV_LOG) {
            config.log_filter = filter;
        }
        config
    }

    /// Tell the user about rejected environment values.
    ///
    /// Call after logging is installed; each value is logged and printed to
    /// stderr so it is still visible once the terminal is restored.
    pub fn report_rejected(&self) {
        for rejected in &self.rejected {
            tracing::warn!(
                variable = rejected.variable,
                value = %rejected.value,
                "Ignoring invalid environment value"
            );
            eprintln!("Warning: {}", rejected);
        }
    }

    /// Apply command-line overrides.
    pub fn apply_args(mut self, options: &CliOptions) -> Self {
        if let Some(endpoint) = &options.endpoint {
            self.endpoint = endpoint.clone();
        }
        if let Some(timeout) = options.timeout {
            self.request_timeout = Some(timeout);
        }
        if let Some(filter) = &options.log_level {
            self.log_filter = filter.clone();
        }
        if options.no_cache {
            self.cache_max_bytes = 0;
        }
        self
    }
}

/// Parse a positive number of seconds.
pub fn parse_timeout_secs(raw: &str) -> Option<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
        _ => None,
    }
}
