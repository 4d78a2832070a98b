use reqwest::StatusCode;
use thiserror::Error;

use crate::application::lists::SourceError;

/// Failures surfaced by the remote TaskClass API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API url: {0}")]
    Url(#[from] url::ParseError),
    #[error("http error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server rejected request: status {status} body {body}")]
    Status { status: StatusCode, body: String },
    #[error("failed to decode response body: {0}")]
    Decode(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ApiError {
    /// True when the remote refused the request for lack of privileges.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status, .. }
            if *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN)
    }
}

impl From<ApiError> for SourceError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Decode(detail) => SourceError::Decode(detail),
            err if err.is_unauthorized() => SourceError::Unauthorized,
            err => SourceError::Transport(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_status_maps_to_unauthorized() {
        let err = ApiError::Status {
            status: StatusCode::FORBIDDEN,
            body: String::new(),
        };
        assert!(matches!(SourceError::from(err), SourceError::Unauthorized));
    }

    #[test]
    fn decode_failures_keep_their_kind() {
        let err = ApiError::Decode("unexpected shape".into());
        assert!(matches!(SourceError::from(err), SourceError::Decode(_)));
    }

    #[test]
    fn other_statuses_are_transport_failures() {
        let err = ApiError::Status {
            status: StatusCode::BAD_GATEWAY,
            body: "upstream down".into(),
        };
        assert!(matches!(SourceError::from(err), SourceError::Transport(_)));
    }
}
