//! Birth chart feature slice.
//!
//! Accepts a birth date, time and place, hands them to a [`ChartEngine`] and answers
//! with the sun, moon and ascendant signs. The slice never computes positions itself;
//! anything calendar or coordinate related is the engine's call.
//!
//! [`ChartEngine`]: natal_ephemeris::ChartEngine

pub mod domain;
mod error;
#[cfg(feature = "server")]
pub mod server;
pub mod service;

pub use error::{ChartError, ChartErrorExt, StatusPolicy};
pub use service::{calculate, positions};

use natal_ephemeris::Ephemeris;
use natal_kernel::domain::config::ChartConfig;
use natal_kernel::domain::registry::InitializedSlice;
use tracing::info;

/// Chart feature state.
#[natal_derive::natal_slice]
pub struct Charts {
    pub engine: Ephemeris,
    pub policy: StatusPolicy,
}

/// Initialize the chart feature.
///
/// # Errors
/// Returns [`ChartError::Internal`] when the configured year window is empty.
pub fn init(config: &ChartConfig) -> Result<InitializedSlice, ChartError> {
    if config.min_year > config.max_year {
        return Err(ChartError::Internal {
            message: format!(
                "chart.min_year ({}) is after chart.max_year ({})",
                config.min_year, config.max_year
            )
            .into(),
            context: None,
        });
    }

    let inner = ChartsInner {
        engine: Ephemeris::with_year_range(config.min_year, config.max_year),
        policy: StatusPolicy::from_flag(config.client_errors),
    };

    info!(
        min_year = config.min_year,
        max_year = config.max_year,
        client_errors = config.client_errors,
        "Chart slice initialized"
    );

    Ok(InitializedSlice::new(Charts::new(inner)))
}
