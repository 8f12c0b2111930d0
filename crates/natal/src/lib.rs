//! Facade crate for Natal features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `natal` with the `server` feature for the HTTP routers.
//! - Call [`init`] to build the feature slices, then register them in the API state.

pub use natal_domain as domain;
use natal_domain::config::ApiConfig;
use natal_domain::registry::InitializedSlice;
pub use natal_ephemeris as ephemeris;
pub use natal_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use natal_chart::server::chart_router;
        pub use natal_kernel::server::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use natal_chart as chart;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "chart",
        #[cfg(feature = "server")]
        "server",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialization failed in one of the feature slices.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("chart feature: {0}")]
    Chart(#[from] natal_chart::ChartError),
}

/// Initialize all enabled features.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(config: &ApiConfig) -> Result<Vec<InitializedSlice>, InitError> {
    let slices = vec![features::chart::init(&config.chart)?];
    Ok(slices)
}
