//! Startup configuration and logging.
//!
//! # Components
//!
//! - [`config`] - [`AppConfig`] defaults, environment and CLI overrides
//! - [`logging`] - `tracing` subscriber writing to rotated log files
//!
//! # Usage
//!
//! ```ignore
//! use graphqlconf::startup::{init_logging, AppConfig};
//!
//! let config = AppConfig::from_env().apply_args(&options);
//! let _log_guard = init_logging(&config);
//! config.report_rejected();
//! ```

pub mod config;
pub mod logging;

pub use config::AppConfig;
pub use config::RejectedEnvValue;
pub use logging::{init_logging, init_logging_in, LogGuard};
