use crate::domain::{BirthChartRequest, PositionsResult, SignResult};
use crate::{ChartError, Charts, StatusPolicy, service};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use natal_derive::api_handler;
use natal_kernel::domain::constants::CHART_TAG;
use natal_kernel::server::ErrorDetail;
use natal_kernel::server::state::ApiState;

/// A failed request together with the status policy it is reported under.
#[derive(Debug)]
pub(super) struct Rejection {
    error: ChartError,
    policy: StatusPolicy,
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        self.error.into_response_with(self.policy)
    }
}

impl From<ChartError> for Rejection {
    fn from(error: ChartError) -> Self {
        Self { error, policy: StatusPolicy::default() }
    }
}

fn slice(state: &ApiState) -> Result<&Charts, Rejection> {
    state.try_get_slice::<Charts>().map_err(|e| ChartError::from(e.to_string()).into())
}

fn body(
    payload: Result<Json<BirthChartRequest>, JsonRejection>,
    policy: StatusPolicy,
) -> Result<BirthChartRequest, Rejection> {
    payload.map(|Json(request)| request).map_err(|rejection| Rejection {
        error: ChartError::Body { message: rejection.body_text().into(), context: None },
        policy,
    })
}

#[api_handler(
    post,
    path = "/calculate",
    request_body = BirthChartRequest,
    responses(
        (status = OK, description = "Sun, moon and ascendant signs", body = SignResult),
        (status = BAD_REQUEST, description = "Malformed birth data (with chart.client_errors)", body = ErrorDetail),
        (status = UNPROCESSABLE_ENTITY, description = "Body is not a birth chart request", body = ErrorDetail),
        (status = INTERNAL_SERVER_ERROR, description = "Parsing or calculation failed", body = ErrorDetail),
    ),
    tag = CHART_TAG,
)]
pub(super) async fn calculate_handler(
    State(state): State<ApiState>,
    payload: Result<Json<BirthChartRequest>, JsonRejection>,
) -> Result<Json<SignResult>, Rejection> {
    let charts = slice(&state)?;
    let request = body(payload, charts.policy)?;

    service::calculate(&charts.engine, &request)
        .map(Json)
        .map_err(|error| Rejection { error, policy: charts.policy })
}

#[api_handler(
    post,
    path = "/positions",
    request_body = BirthChartRequest,
    responses(
        (status = OK, description = "Longitudes, degrees and minutes of each point", body = PositionsResult),
        (status = BAD_REQUEST, description = "Malformed birth data (with chart.client_errors)", body = ErrorDetail),
        (status = UNPROCESSABLE_ENTITY, description = "Body is not a birth chart request", body = ErrorDetail),
        (status = INTERNAL_SERVER_ERROR, description = "Parsing or calculation failed", body = ErrorDetail),
    ),
    tag = CHART_TAG,
)]
pub(super) async fn positions_handler(
    State(state): State<ApiState>,
    payload: Result<Json<BirthChartRequest>, JsonRejection>,
) -> Result<Json<PositionsResult>, Rejection> {
    let charts = slice(&state)?;
    let request = body(payload, charts.policy)?;

    service::positions(&charts.engine, &request)
        .map(Json)
        .map_err(|error| Rejection { error, policy: charts.policy })
}
