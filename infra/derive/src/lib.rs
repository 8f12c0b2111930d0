#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the Natal workspace.
//!
//! * [`natal_error`] turns an enum into a `thiserror` error with `.context(..)` support.
//! * [`api_model`] and [`api_handler`] keep DTOs and Axum handlers consistent with `OpenAPI`.
//! * [`natal_slice`] wraps feature state in an `Arc` and registers it as a feature slice.
//! * [`main`] boots an `async fn main` on a `natal-runtime` profile.
//!
//! The examples below are `ignore`d because a proc-macro crate cannot use its own output.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Boots an `async fn main` on a pre-configured Tokio runtime.
///
/// # Arguments
///
/// * `high_performance` - server profile (larger stacks, long keep-alive).
/// * `memory_efficient` - half the workers, small stacks.
/// * `default` or nothing - auto-detected worker count.
///
/// # Examples
///
/// ```rust,ignore
/// #[natal_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Declares an API data transfer object.
///
/// Adds `Debug`, `Serialize` and `Deserialize` when they are not derived yet, derives
/// `utoipa::ToSchema` under the `server` feature, and applies the serde policy
/// `rename_all = "camelCase"` + `deny_unknown_fields`.
///
/// # Arguments
///
/// * `rename_all = "..."` - overrides the rename policy.
/// * `deny_unknown_fields = false` - accepts (and ignores) unknown JSON fields.
///
/// # Example
///
/// ```rust,ignore
/// #[api_model(deny_unknown_fields = false)]
/// pub struct BirthChartRequest {
///     pub name: String,
///     pub birth_date: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Registers an Axum handler with `utoipa::path` when the `server` feature is enabled.
///
/// Accepts the regular `utoipa::path` arguments (`post`, `path = "..."`, `responses(...)`,
/// `tag = ...`).
///
/// # Example
///
/// ```rust,ignore
/// #[api_handler(
///     get,
///     path = "/health",
///     responses((status = OK, body = HealthResponse)),
///     tag = SYSTEM_TAG,
/// )]
/// pub async fn health_handler() -> impl IntoResponse { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Turns an enum into a domain error type.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already present.
/// * `<Name>Ext` trait adding `.context(..)` to `Result<T, Name>` and to
///   `Result<T, Source>` for every variant carrying a `source` field.
/// * `From<Source>` for those variants, so `?` works on upstream errors.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * A module-level `format_context` helper used in the `#[error(..)]` strings.
///
/// # Requirements
///
/// Variants must use named fields. Variants with a source must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// #[natal_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn natal_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Declares a feature slice handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` is generated as a cheap
/// `Arc` wrapper that derefs to the inner state and implements `FeatureSlice`.
///
/// # Example
/// ```rust,ignore
/// #[natal_derive::natal_slice]
/// pub struct Charts {
///     pub engine: Ephemeris,
/// }
///
/// let charts = Charts::new(ChartsInner { engine: Ephemeris::default() });
/// ```
#[proc_macro_attribute]
pub fn natal_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
