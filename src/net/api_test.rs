use super::*;
use crate::net::types::{LoginResponse, MfaVerifyResponse};

#[test]
fn service_base_reuses_page_protocol_and_hostname() {
    assert_eq!(service_base("http:", "localhost"), "http://localhost:5000");
    assert_eq!(
        service_base("https:", "portal.example.org"),
        "https://portal.example.org:5000"
    );
}

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(login_endpoint("http://localhost:5000"), "http://localhost:5000/auth/login");
    assert_eq!(
        mfa_verify_endpoint("http://localhost:5000"),
        "http://localhost:5000/auth/mfa-verify"
    );
}

#[test]
fn login_outcome_ok_when_mfa_required() {
    let body = LoginResponse { mfa_required: true, ..LoginResponse::default() };
    assert_eq!(login_outcome(true, body), Ok(()));
}

#[test]
fn login_outcome_rejects_success_without_mfa_flag() {
    // `{}` with HTTP 200: the service did not move the flow forward.
    assert_eq!(
        login_outcome(true, LoginResponse::default()),
        Err(ApiError::Rejected("Login failed. Please check your credentials.".to_owned()))
    );
}

#[test]
fn login_outcome_surfaces_service_error_text() {
    let body = LoginResponse {
        error: Some("Invalid username or password".to_owned()),
        ..LoginResponse::default()
    };
    assert_eq!(
        login_outcome(false, body),
        Err(ApiError::Rejected("Invalid username or password".to_owned()))
    );
}

#[test]
fn login_outcome_ignores_mfa_flag_on_error_status() {
    let body = LoginResponse { mfa_required: true, ..LoginResponse::default() };
    assert_eq!(
        login_outcome(false, body),
        Err(ApiError::Rejected("Login failed. Please check your credentials.".to_owned()))
    );
}

#[test]
fn verify_outcome_ok_on_success() {
    let body = MfaVerifyResponse { success: true, ..MfaVerifyResponse::default() };
    assert_eq!(verify_outcome(true, body), Ok(()));
}

#[test]
fn verify_outcome_surfaces_service_error_text() {
    let body = MfaVerifyResponse {
        error: Some("Invalid code".to_owned()),
        ..MfaVerifyResponse::default()
    };
    assert_eq!(verify_outcome(false, body), Err(ApiError::Rejected("Invalid code".to_owned())));
}

#[test]
fn verify_outcome_falls_back_on_missing_error_text() {
    assert_eq!(
        verify_outcome(true, MfaVerifyResponse::default()),
        Err(ApiError::Rejected("Invalid MFA code. Please try again.".to_owned()))
    );
}

#[test]
fn rejected_error_displays_its_text() {
    assert_eq!(ApiError::Rejected("Invalid code".to_owned()).to_string(), "Invalid code");
}

#[test]
fn transport_error_displays_cause() {
    assert_eq!(
        ApiError::Transport("request timed out".to_owned()).to_string(),
        "connection error: request timed out"
    );
}
