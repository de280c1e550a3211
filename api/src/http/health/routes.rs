use axum::{Router, extract::State, http::StatusCode, routing::get};
use grove_core::domain::health::port::HealthService;

use crate::http::server::{ApiError, AppState};

pub async fn health_check(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.service.healthy().await?;
    Ok(StatusCode::OK)
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
