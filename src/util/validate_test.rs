use super::*;

#[test]
fn validate_credentials_trims_username() {
    assert_eq!(
        validate_credentials("  alice  ", "hunter2"),
        Ok(("alice".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_credentials_rejects_missing_username() {
    assert_eq!(
        validate_credentials("   ", "hunter2"),
        Err("Please enter both username and password")
    );
}

#[test]
fn validate_credentials_rejects_missing_password() {
    assert_eq!(
        validate_credentials("alice", ""),
        Err("Please enter both username and password")
    );
}

#[test]
fn validate_credentials_keeps_password_verbatim() {
    // Passwords are not trimmed; leading/trailing spaces are significant.
    assert_eq!(
        validate_credentials("alice", "  p4ss  "),
        Ok(("alice".to_owned(), "  p4ss  ".to_owned()))
    );
}

#[test]
fn validate_mfa_code_accepts_six_digits() {
    assert_eq!(validate_mfa_code("123456"), Ok("123456".to_owned()));
}

#[test]
fn validate_mfa_code_trims_surrounding_whitespace() {
    assert_eq!(validate_mfa_code(" 123456 "), Ok("123456".to_owned()));
}

#[test]
fn validate_mfa_code_rejects_wrong_length() {
    assert_eq!(validate_mfa_code("12345"), Err("Please enter a valid 6-digit code"));
    assert_eq!(validate_mfa_code("1234567"), Err("Please enter a valid 6-digit code"));
    assert_eq!(validate_mfa_code(""), Err("Please enter a valid 6-digit code"));
}

#[test]
fn validate_mfa_code_rejects_non_digits() {
    assert_eq!(validate_mfa_code("12a456"), Err("Please enter a valid 6-digit code"));
    assert_eq!(validate_mfa_code("123 56"), Err("Please enter a valid 6-digit code"));
}

#[test]
fn validate_mfa_code_rejects_non_ascii_digits() {
    assert_eq!(validate_mfa_code("１２３４５６"), Err("Please enter a valid 6-digit code"));
}
