//! Session state, header derivation, and the authentication flows.

pub mod headers;
pub mod store;

pub use headers::HeaderOptions;
pub use store::SessionStore;
