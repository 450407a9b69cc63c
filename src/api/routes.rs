use crate::api::controller::home_controller::*;
use crate::api::controller::message_controller::*;
use crate::api::controller::utils_controller::*;
use crate::api::dto::*;
use crate::api::server_state::ServerState;
use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn routes(state: ServerState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(home))
        .route("/health", get(health_action))
        .route("/api/message", get(get_message))
        .route("/api/update-message", post(update_message))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

#[derive(OpenApi)]
#[openapi(
    servers(
        (description="dev", url="http://localhost:5000"),
    ),
    paths(
        health_action,
        get_message,
        update_message,
    ),
    components(
        schemas(
            HealthResponse,
            UnhealthyResponse,
            CurrentMessageResponse,
            UpdateMessageRequest,
            UpdateMessageResponse,
            ErrorResponse,
        ),
    )
)]
pub struct ApiDoc;
