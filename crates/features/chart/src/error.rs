use natal_ephemeris::EphemerisError;
use std::borrow::Cow;

/// A specialized [`ChartError`] enum of this crate.
#[natal_derive::natal_error]
pub enum ChartError {
    /// `birthDate` is not three integers joined by `-`.
    #[error("Invalid birth date{}: {message}", format_context(.context))]
    InvalidDate { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// `birthTime` is not two integers joined by `:`.
    #[error("Invalid birth time{}: {message}", format_context(.context))]
    InvalidTime { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The engine refused or failed to cast the chart.
    #[error("Chart calculation failed{}: {source}", format_context(.context))]
    Engine { source: EphemerisError, context: Option<Cow<'static, str>> },

    /// The request body could not be decoded.
    #[error("Invalid request body{}: {message}", format_context(.context))]
    Body { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for wiring faults.
    #[error("Internal chart error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// How failures map onto HTTP status codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Every parse or engine failure is a `500`.
    #[default]
    ServerErrors,
    /// Bad birth data is a `400`; only engine faults stay `500`.
    ClientErrors,
}

impl StatusPolicy {
    #[must_use]
    pub const fn from_flag(client_errors: bool) -> Self {
        if client_errors { Self::ClientErrors } else { Self::ServerErrors }
    }
}

impl ChartError {
    /// Whether the caller's data, rather than the service, caused the failure.
    #[must_use]
    pub const fn is_client_fault(&self) -> bool {
        match self {
            Self::InvalidDate { .. } | Self::InvalidTime { .. } | Self::Body { .. } => true,
            Self::Engine { source, .. } => source.is_input_error(),
            Self::Internal { .. } => false,
        }
    }
}

#[cfg(feature = "server")]
mod response {
    use super::{ChartError, StatusPolicy};
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use natal_kernel::server::ErrorDetail;

    impl ChartError {
        #[must_use]
        pub fn status(&self, policy: StatusPolicy) -> StatusCode {
            match (self, policy) {
                (Self::Body { .. }, _) => StatusCode::UNPROCESSABLE_ENTITY,
                (error, StatusPolicy::ClientErrors) if error.is_client_fault() => {
                    StatusCode::BAD_REQUEST
                }
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }

        /// Renders `{"detail": ...}` with the status chosen by `policy`.
        #[must_use]
        pub fn into_response_with(self, policy: StatusPolicy) -> Response {
            let status = self.status(policy);
            ErrorDetail::new(self.to_string()).with_status(status)
        }
    }

    impl IntoResponse for ChartError {
        fn into_response(self) -> Response {
            self.into_response_with(StatusPolicy::default())
        }
    }
}
