//! Response envelopes of the authentication endpoints.
//!
//! The backend wraps payloads in `{ success, message, ... }` envelopes;
//! `success` and `message` are tolerated as optional so older backend
//! versions that omit them still parse.

use serde::Deserialize;

use super::UserProfile;

/// Response of `POST /api/auth/login`: the issued token plus the identity
/// behind it. Persisting the token is the caller's job.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub token: String,
    pub user: UserProfile,
}

/// Response of `POST /api/auth/register`. Some deployments issue a token on
/// registration, others require a follow-up login; the field is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    pub user: UserProfile,
}

/// Response of `GET /api/auth/me`.
#[derive(Debug, Clone, Deserialize)]
pub struct MeResponse {
    #[serde(default)]
    pub success: bool,
    pub user: UserProfile,
}
