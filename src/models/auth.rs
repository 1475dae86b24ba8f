//! Request payloads for the authentication endpoints.

use std::fmt;

use serde::Serialize;

/// Login payload for `POST /api/auth/login`.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration payload for `POST /api/auth/register`.
#[derive(Clone, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

// Manual Debug impls keep passwords out of logs and error chains.

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_password() {
        let credentials = Credentials {
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        let debug = format!("{:?}", credentials);
        assert!(debug.contains("ada@example.com"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_registration_debug_redacts_password() {
        let registration = Registration {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        let debug = format!("{:?}", registration);
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_credentials_serialize_includes_password() {
        // The wire payload must carry the password even though Debug hides it
        let credentials = Credentials {
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        let json = serde_json::to_string(&credentials).expect("Failed to serialize credentials");
        assert!(json.contains("hunter2"));
    }
}
