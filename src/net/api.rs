//! HTTP calls to the authentication service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Non-browser builds get stubs returning a transport error since the flow
//! only runs in the browser.
//!
//! ERROR HANDLING
//! ==============
//! `ApiError` separates remote rejections, which carry the text to display,
//! from transport failures, which callers render as a generic connection
//! message. Local input validation never reaches this module.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

#[cfg(any(test, feature = "hydrate"))]
use super::types::{LoginResponse, MfaVerifyResponse};
#[cfg(feature = "hydrate")]
use super::types::{LoginRequest, MfaVerifyRequest};

/// Port the authentication service listens on, regardless of how the page
/// itself is served.
pub const AUTH_SERVICE_PORT: u16 = 5000;

/// Failure of a call to the authentication service.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The service answered and refused the attempt; the payload is the text
    /// to display (service-provided or a per-operation fallback).
    #[error("{0}")]
    Rejected(String),
    /// The request never completed, or the body could not be decoded.
    #[error("connection error: {0}")]
    Transport(String),
}

/// Base URL of the authentication service: the page's own protocol and
/// hostname with the fixed service port. `protocol` is in `Location.protocol`
/// form, colon included.
#[cfg(any(test, feature = "hydrate"))]
fn service_base(protocol: &str, hostname: &str) -> String {
    format!("{protocol}//{hostname}:{AUTH_SERVICE_PORT}")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint(base: &str) -> String {
    format!("{base}/auth/login")
}

#[cfg(any(test, feature = "hydrate"))]
fn mfa_verify_endpoint(base: &str) -> String {
    format!("{base}/auth/mfa-verify")
}

/// Classify a login response. Success means the password was accepted and
/// the service is moving the flow to the MFA step; anything else is a
/// rejection carrying display text.
#[cfg(any(test, feature = "hydrate"))]
fn login_outcome(status_ok: bool, body: LoginResponse) -> Result<(), ApiError> {
    if status_ok && body.mfa_required {
        return Ok(());
    }
    Err(ApiError::Rejected(body.error.unwrap_or_else(|| {
        "Login failed. Please check your credentials.".to_owned()
    })))
}

/// Classify an MFA verification response.
#[cfg(any(test, feature = "hydrate"))]
fn verify_outcome(status_ok: bool, body: MfaVerifyResponse) -> Result<(), ApiError> {
    if status_ok && body.success {
        return Ok(());
    }
    Err(ApiError::Rejected(
        body.error
            .unwrap_or_else(|| "Invalid MFA code. Please try again.".to_owned()),
    ))
}

#[cfg(feature = "hydrate")]
fn page_base() -> Result<String, ApiError> {
    let location = web_sys::window()
        .ok_or_else(|| ApiError::Transport("no window".to_owned()))?
        .location();
    let protocol = location
        .protocol()
        .map_err(|_| ApiError::Transport("no page protocol".to_owned()))?;
    let hostname = location
        .hostname()
        .map_err(|_| ApiError::Transport("no page hostname".to_owned()))?;
    Ok(service_base(&protocol, &hostname))
}

/// Submit credentials via `POST /auth/login`.
///
/// `Ok(())` means the password was accepted and the service expects an MFA
/// code next.
///
/// # Errors
///
/// [`ApiError::Rejected`] with display text when the service refuses the
/// credentials or answers with an unexpected shape; [`ApiError::Transport`]
/// when the request or the body decode fails.
pub async fn login(username: &str, password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = LoginRequest {
            username: username.to_owned(),
            password: password.to_owned(),
        };
        let resp = gloo_net::http::Request::post(&login_endpoint(&page_base()?))
            .json(&payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status_ok = resp.ok();
        let body: LoginResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        login_outcome(status_ok, body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(ApiError::Transport("not available outside the browser".to_owned()))
    }
}

/// Verify a 6-digit MFA code via `POST /auth/mfa-verify`.
///
/// `Ok(())` means the code was accepted and the session is established.
///
/// # Errors
///
/// [`ApiError::Rejected`] with display text when the service refuses the
/// code or answers with an unexpected shape; [`ApiError::Transport`] when
/// the request or the body decode fails.
pub async fn verify_mfa(username: &str, mfa_code: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = MfaVerifyRequest {
            username: username.to_owned(),
            mfa_code: mfa_code.to_owned(),
        };
        let resp = gloo_net::http::Request::post(&mfa_verify_endpoint(&page_base()?))
            .json(&payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status_ok = resp.ok();
        let body: MfaVerifyResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        verify_outcome(status_ok, body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, mfa_code);
        Err(ApiError::Transport("not available outside the browser".to_owned()))
    }
}
