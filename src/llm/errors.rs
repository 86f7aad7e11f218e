use thiserror::Error;

/// Longest slice of a provider error body carried in an error message.
pub const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("request to inference provider failed: {0}")]
    Transport(String),

    #[error("inference provider returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("malformed response from inference provider: {0}")]
    MalformedResponse(String),

    #[error("inference provider returned no choices")]
    EmptyResponse,
}

impl GenerationError {
    pub fn api(status: reqwest::StatusCode, body: &str) -> Self {
        Self::Api {
            status,
            body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
        }
    }

    /// Rate limiting, provider-side failures and dropped connections are worth
    /// another attempt; everything else will fail the same way again.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Api { status, .. } => {
                *status == reqwest::StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
            }
            Self::MalformedResponse(_) | Self::EmptyResponse => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_retry_classification() {
        assert!(GenerationError::Transport("connection reset".into()).is_retryable());
        assert!(GenerationError::api(StatusCode::TOO_MANY_REQUESTS, "slow down").is_retryable());
        assert!(GenerationError::api(StatusCode::BAD_GATEWAY, "").is_retryable());

        assert!(!GenerationError::api(StatusCode::UNAUTHORIZED, "bad key").is_retryable());
        assert!(!GenerationError::api(StatusCode::BAD_REQUEST, "model not found").is_retryable());
        assert!(!GenerationError::EmptyResponse.is_retryable());
        assert!(!GenerationError::MalformedResponse("eof".into()).is_retryable());
    }

    #[test]
    fn test_api_body_is_truncated() {
        let body = "x".repeat(1000);
        match GenerationError::api(StatusCode::INTERNAL_SERVER_ERROR, &body) {
            GenerationError::Api { body, .. } => assert_eq!(body.len(), MAX_ERROR_BODY_CHARS),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
