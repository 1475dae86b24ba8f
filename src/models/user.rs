//! User identity as returned by the authentication backend.

use serde::{Deserialize, Serialize};

/// Profile of an authenticated user.
///
/// The backend is a Mongo-backed Node service, so the identifier arrives
/// under `_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}
