//! Names shared by the server, the OpenAPI document and the logs.

pub const APP_NAME: &str = "natal-server";

/// Default configuration file stem, resolved by extension (`server.toml`, `server.json`, ...).
pub const DEFAULT_CONFIG_FILE: &str = "server";
/// Environment prefix for configuration overrides (`NATAL__SERVER__PORT=9000`).
pub const CONFIG_ENV_PREFIX: &str = "NATAL";
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// OpenAPI tags
pub const SYSTEM_TAG: &str = "System";
pub const CHART_TAG: &str = "Chart";

/// Origin pattern that allows any caller.
pub const ANY_ORIGIN: &str = "*";
