mod handlers;

use natal_kernel::server::state::ApiState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Chart endpoints; expects the [`Charts`](crate::Charts) slice in the state.
pub fn chart_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::calculate_handler))
        .routes(routes!(handlers::positions_handler))
}
