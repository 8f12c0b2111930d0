use axum::Router;
use natal::kernel::server::state::ApiState;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

use crate::cors::cors_layer;

#[derive(OpenApi)]
#[openapi(info(title = "Natal", description = "Sun, moon and ascendant signs from birth data"))]
struct ApiDoc;

pub(crate) fn init(state: ApiState) -> Router {
    let api = ApiDoc::openapi();
    let cors = cors_layer(&state.config.cors);

    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(api)
        .merge(natal::server::router::system_router())
        .merge(natal::server::router::chart_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    // Create the Scalar UI routes
    let scalar_routes = Scalar::with_url("/api", api_doc);

    Router::new().merge(openapi_routes).merge(scalar_routes).layer(cors)
}
