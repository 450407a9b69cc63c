use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";
pub const STATUS_HEALTHY: &str = "healthy";
pub const STATUS_UNHEALTHY: &str = "unhealthy";

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateMessageRequest {
    pub message: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CurrentMessageResponse {
    pub message: String,
    pub status: String,
    pub timestamp: String,
    pub pod: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateMessageResponse {
    pub status: String,
    pub message: String,
    pub new_message: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub pod: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

impl UpdateMessageRequest {
    /// Lenient body parsing: anything that is not a JSON object with a string
    /// `message` field is treated as a request without a message.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<serde_json::Value>(body) {
            Ok(value) if value.is_object() => serde_json::from_value(value).unwrap_or_default(),
            Ok(_) => UpdateMessageRequest::default(),
            Err(e) => {
                tracing::debug!("Update request body is not valid JSON: {}", e);

                UpdateMessageRequest::default()
            }
        }
    }
}
