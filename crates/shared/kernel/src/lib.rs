//! Kernel utilities shared across slices.
//! Keep this crate lightweight: configuration loading, the shared API state, and the
//! system endpoints every server exposes.
//!
//! ## Config loading
//! ```rust,no_run
//! use natal_kernel::config::load_config;
//! use natal_kernel::domain::config::ApiConfig;
//!
//! // `server.toml` (or `.json`, `.yaml`) when present, then `NATAL__*` overrides.
//! let cfg: ApiConfig = load_config(None::<&str>)?;
//! # Ok::<(), natal_kernel::config::ConfigError>(())
//! ```
pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

pub use natal_domain as domain;
