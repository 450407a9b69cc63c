use crate::api::dto::{ErrorResponse, STATUS_ERROR};
use crate::domain::error::MessageError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

impl MessageError {
    pub fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match &self {
            MessageError::MissingMessage => StatusCode::BAD_REQUEST,
            MessageError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(ErrorResponse {
                status: STATUS_ERROR.to_string(),
                message: self.to_string(),
            }),
        )
    }
}

impl IntoResponse for MessageError {
    fn into_response(self) -> axum::response::Response {
        self.into_error_response().into_response()
    }
}
