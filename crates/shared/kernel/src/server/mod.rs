//! Axum building blocks shared by every server: state, error bodies and system routes.

mod detail;
mod health;
mod router;
pub mod state;

pub use detail::ErrorDetail;
pub use router::system_router;
