use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Credentials or token rejected by server")]
    Rejected,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl AuthError {
    /// Truncate a response body to avoid logging excessive data
    pub(crate) fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        let mut end = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
    }

    /// Map a non-success HTTP status to an error.
    ///
    /// 401, 403 and 422 all mean the server refused the credentials or
    /// token; the backend uses 422 for validation failures on register.
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let truncated = Self::truncate_body(body);
        match status.as_u16() {
            401 | 403 | 422 => AuthError::Rejected,
            500..=599 => AuthError::Server(truncated),
            _ => AuthError::InvalidResponse(format!("Status {}: {}", status, truncated)),
        }
    }

    /// True when the failure means the server refused the credentials or
    /// token, as opposed to transport or server trouble.
    pub fn is_rejected(&self) -> bool {
        matches!(self, AuthError::Rejected)
    }
}
