//! Data models for the chatterbox authentication API.
//!
//! These map the backend's JSON payloads onto typed structs. Field names
//! follow the wire format via serde attributes (notably Mongo's `_id`).

pub mod auth;
pub mod response;
pub mod user;

pub use auth::{Credentials, Registration};
pub use response::{LoginResponse, MeResponse, RegisterResponse};
pub use user::UserProfile;
