use crate::api::dto::{HealthResponse, STATUS_HEALTHY, STATUS_UNHEALTHY, UnhealthyResponse};
use crate::api::server_state::ServerState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Local;

#[utoipa::path(get, path = "/health",
    tag="utils",
    responses(
        (status = 200, description = "Message file is readable", content_type = "application/json", body = HealthResponse),
        (status = 500, description = "Message file is not readable", content_type = "application/json", body = UnhealthyResponse),
    )
)]
pub async fn health_action(State(state): State<ServerState>) -> impl IntoResponse {
    match state.message_service.get_message().await {
        Ok(_) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: STATUS_HEALTHY.to_string(),
                timestamp: Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
                pod: state.config.pod().to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(UnhealthyResponse {
                    status: STATUS_UNHEALTHY.to_string(),
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
