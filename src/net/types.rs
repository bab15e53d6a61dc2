//! Wire DTOs for the authentication service endpoints.
//!
//! DESIGN
//! ======
//! Response fields are all defaulted so whatever shape the service returns
//! still deserializes; outcome classification happens in `api`, not in serde.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body for `POST /auth/mfa-verify`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MfaVerifyRequest {
    pub username: String,
    pub mfa_code: String,
}

/// Response body for `POST /auth/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    /// Set when the password was accepted and an MFA code is expected next.
    #[serde(default)]
    pub mfa_required: bool,
    /// Human-readable detail on success, if the service provides one.
    #[serde(default)]
    pub message: Option<String>,
    /// Display text for a rejection, if the service provides one.
    #[serde(default)]
    pub error: Option<String>,
}

/// Response body for `POST /auth/mfa-verify`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MfaVerifyResponse {
    /// Set when the code was accepted and the session is established.
    #[serde(default)]
    pub success: bool,
    /// Human-readable detail on success, if the service provides one.
    #[serde(default)]
    pub message: Option<String>,
    /// Display text for a rejection, if the service provides one.
    #[serde(default)]
    pub error: Option<String>,
}
