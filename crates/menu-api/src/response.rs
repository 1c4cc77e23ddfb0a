//! JSON envelope shared by every menu endpoint

use chrono::Utc;
use serde::Serialize;

/// `{success, data?, error?, timestamp}`; absent parts are left out of the body.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorBody>,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub code: &'static str,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self::envelope(Some(data), None)
    }

    pub fn error(code: &'static str, message: impl Into<String>) -> Self {
        Self::envelope(None, Some(ApiErrorBody { code, message: message.into() }))
    }

    fn envelope(data: Option<T>, error: Option<ApiErrorBody>) -> Self {
        Self {
            success: error.is_none(),
            data,
            error,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
