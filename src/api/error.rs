//! Error body returned by the backend

use serde::{Deserialize, Serialize};

/// `{"success": false, "error": <status>, "message": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub success: bool,
    /// HTTP status code, repeated in the body
    pub error: u16,
    pub message: String,
}

impl ApiErrorBody {
    /// Parse a response body, `None` if it is not an error envelope
    pub fn from_json(body: &str) -> Option<Self> {
        serde_json::from_str::<Self>(body)
            .ok()
            .filter(|body| !body.success)
    }

    /// 401 and 403 mean the token is missing, expired or lacks the permission
    pub fn is_auth_failure(&self) -> bool {
        matches!(self.error, 401 | 403)
    }
}

impl std::fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.error, self.message.trim())
    }
}
