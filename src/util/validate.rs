//! Local input validation for the login flow.
//!
//! DESIGN
//! ======
//! Validators are pure so submit handlers can reject bad input before any
//! network activity and every rejection branch is coverable without a browser.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Validate the credential form inputs.
///
/// The username is trimmed; the password is taken exactly as typed. Both must
/// be non-empty.
///
/// # Errors
///
/// Returns the inline validation message when either field is missing.
pub fn validate_credentials(
    username: &str,
    password: &str,
) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Please enter both username and password");
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Validate the MFA code input: exactly six ASCII digits after trimming.
///
/// # Errors
///
/// Returns the inline validation message when the code is not a 6-digit
/// number.
pub fn validate_mfa_code(code: &str) -> Result<String, &'static str> {
    let code = code.trim();
    if code.len() != 6 || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err("Please enter a valid 6-digit code");
    }
    Ok(code.to_owned())
}
