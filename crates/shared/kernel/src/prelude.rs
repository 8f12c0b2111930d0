pub use crate::config::{ConfigError, ConfigErrorExt, load_config};
pub use crate::domain::config::{ApiConfig, ChartConfig, CorsConfig, LoggingConfig};
pub use crate::domain::registry::{FeatureSlice, InitializedSlice};

#[cfg(feature = "server")]
pub use crate::server::{
    ErrorDetail,
    state::{ApiState, ApiStateError},
    system_router,
};
