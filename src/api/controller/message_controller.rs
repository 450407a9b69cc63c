use crate::api::dto::{
    CurrentMessageResponse, ErrorResponse, STATUS_SUCCESS, UpdateMessageRequest,
    UpdateMessageResponse,
};
use crate::api::server_state::ServerState;
use crate::domain::error::MessageError;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

#[utoipa::path(get, path = "/api/message",
    tag="message",
    responses(
        (status = 200, description = "Current message", content_type = "application/json", body = CurrentMessageResponse),
        (status = 500, description = "Message file could not be read", content_type = "application/json", body = ErrorResponse),
    )
)]
pub async fn get_message(
    State(state): State<ServerState>,
) -> Result<Json<CurrentMessageResponse>, MessageError> {
    let message = state.message_service.get_message().await?;

    Ok(Json(CurrentMessageResponse {
        message,
        status: STATUS_SUCCESS.to_string(),
        timestamp: state.message_service.get_last_modified().await,
        pod: state.config.pod().to_string(),
    }))
}

#[utoipa::path(post, path = "/api/update-message",
    request_body = UpdateMessageRequest,
    tag="message",
    responses(
        (status = 200, description = "Message updated", content_type = "application/json", body = UpdateMessageResponse),
        (status = 400, description = "No message provided", content_type = "application/json", body = ErrorResponse),
        (status = 500, description = "Message file could not be written", content_type = "application/json", body = ErrorResponse),
    )
)]
pub async fn update_message(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<Json<UpdateMessageResponse>, MessageError> {
    let new_message = UpdateMessageRequest::from_body(&body)
        .message
        .ok_or(MessageError::MissingMessage)?;

    state.message_service.update_message(&new_message).await?;

    Ok(Json(UpdateMessageResponse {
        status: STATUS_SUCCESS.to_string(),
        message: "Message updated successfully".to_string(),
        new_message,
    }))
}
