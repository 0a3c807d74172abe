//! Error taxonomy for calls to the clinic backend.
//!
//! Every failure is caught at the call site, logged, and turned into a short
//! message for the UI with [`ApiError::user_message`].

/// Failure of a request to the clinic backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Request could not be sent or the connection failed
    #[error("Network failure: {0}")]
    Network(String),

    /// Backend rejected the request payload (400 / 422)
    #[error("Validation failure: {0}")]
    Validation(String),

    /// Any other non-success status
    #[error("Unexpected status {0}")]
    Status(u16),

    /// Response body could not be decoded
    #[error("Malformed response: {0}")]
    Decode(String),
}

/// Error body the backend sends alongside 4xx responses
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ErrorBody {
    #[serde(alias = "message")]
    pub error: String,
}

impl ApiError {
    /// Map a non-success HTTP status (and optional error body) to an error
    pub fn from_status(status: u16, body: Option<ErrorBody>) -> Self {
        match status {
            400 | 422 => ApiError::Validation(
                body.map(|b| b.error)
                    .unwrap_or_else(|| "Invalid request".to_string()),
            ),
            _ => ApiError::Status(status),
        }
    }

    /// Short message suitable for showing to the user
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Network error. Please try again.".to_string(),
            ApiError::Validation(msg) => msg.clone(),
            ApiError::Status(401) | ApiError::Status(403) => {
                "You are not allowed to do that.".to_string()
            }
            ApiError::Status(_) | ApiError::Decode(_) => {
                "Something went wrong. Please try again later.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_status_uses_body_message() {
        let err = ApiError::from_status(
            422,
            Some(ErrorBody {
                error: "Invalid verification code".to_string(),
            }),
        );
        assert_eq!(
            err,
            ApiError::Validation("Invalid verification code".to_string())
        );
        assert_eq!(err.user_message(), "Invalid verification code");
    }

    #[test]
    fn test_validation_status_without_body() {
        let err = ApiError::from_status(400, None);
        assert_eq!(err, ApiError::Validation("Invalid request".to_string()));
    }

    #[test]
    fn test_other_status_is_generic() {
        assert_eq!(ApiError::from_status(500, None), ApiError::Status(500));
        assert_eq!(
            ApiError::Status(403).user_message(),
            "You are not allowed to do that."
        );
        assert_eq!(
            ApiError::Status(503).user_message(),
            "Something went wrong. Please try again later."
        );
    }

    #[test]
    fn test_network_message() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.user_message(), "Network error. Please try again.");
        assert_eq!(err.to_string(), "Network failure: connection refused");
    }

    #[test]
    fn test_error_body_accepts_message_alias() {
        let body: ErrorBody = serde_json::from_str(r#"{"message":"bad code"}"#).unwrap();
        assert_eq!(body.error, "bad code");
    }
}
