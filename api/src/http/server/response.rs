use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use grove_core::domain::common::CoreError;
use serde::Serialize;
use thiserror::Error;

/// Wraps a handler result with the status code it should ship with.
pub struct Response<T> {
    status: StatusCode,
    body: T,
}

impl<T> Response<T> {
    pub fn ok(body: T) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    pub fn created(body: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            body,
        }
    }

    pub fn deleted(body: T) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match &self {
            ApiError::Core(err) => {
                let status = match err {
                    CoreError::UserNotFound { .. }
                    | CoreError::TreeNotFound { .. }
                    | CoreError::DefaultTreeNotFound { .. }
                    | CoreError::MessageNotFound { .. } => StatusCode::NOT_FOUND,
                    CoreError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
                    CoreError::ServiceUnavailable(_) | CoreError::Unhealthy => {
                        StatusCode::SERVICE_UNAVAILABLE
                    }
                    CoreError::DatabaseError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
                };
                let body = ErrorBody {
                    code: err.error_code(),
                    message: err.to_string(),
                };
                (status, body)
            }
            ApiError::Io(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    code: "INTERNAL_ERROR",
                    message: err.to_string(),
                },
            ),
        };

        if status.is_server_error() {
            tracing::error!(code = body.code, message = %body.message, "request failed");
        }

        (status, Json(body)).into_response()
    }
}
