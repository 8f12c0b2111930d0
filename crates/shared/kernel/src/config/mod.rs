use config::{Config, Environment, File};
use natal_domain::constants::{CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_FILE};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// Custom error type for config loading.
#[natal_derive::natal_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Keys whose environment values are comma separated lists.
const LIST_KEYS: [&str; 1] = ["cors.allow_origins"];

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: settings from a file (`server.toml`, `server.json`, ...). An explicit
///    path must exist; the default `server` file is optional, so a bare binary runs on
///    built-in defaults.
/// 2. **Environment Overrides**: values from variables prefixed with `NATAL__`. Nested
///    structures use double underscores (`NATAL__SERVER__PORT=9000` maps to `server.port`),
///    and `NATAL__CORS__ALLOW_ORIGINS` takes a comma separated list.
///
/// # Errors
/// This function will return an error if:
/// * An explicitly given configuration file cannot be found or parsed.
/// * The merged values do not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use natal_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (file, required) = match &path {
        Some(p) => (File::from(p.as_ref()), true),
        None => (File::with_name(DEFAULT_CONFIG_FILE), false),
    };

    let mut environment = Environment::with_prefix(CONFIG_ENV_PREFIX)
        .separator(CONFIG_ENV_SEPARATOR)
        .try_parsing(true)
        .list_separator(",");
    for key in LIST_KEYS {
        environment = environment.with_list_parse_key(key);
    }

    match &path {
        Some(p) => info!("Loading config from {}", p.as_ref().display()),
        None => info!("Loading config from '{DEFAULT_CONFIG_FILE}' if present"),
    }

    let config = Config::builder()
        .add_source(file.required(required))
        .add_source(environment)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
