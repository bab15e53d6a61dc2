//! Login-flow UI state: panel visibility and the transient status message.
//!
//! DESIGN
//! ======
//! Exactly one panel is visible at any time. Modeling the visible panel as an
//! enum makes that invariant structural rather than a set of show/hide
//! toggles that can drift apart.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

/// The visible panel of the login flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Panel {
    /// Username + password form.
    #[default]
    Login,
    /// 6-digit code form, shown once the password is accepted.
    Mfa,
    /// Terminal signed-in panel, shown after MFA verification.
    Success,
}

/// Severity of the transient status message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    /// CSS class modifier for the message area.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// The single status message shown above the active panel.
///
/// There is one message slot; setting a new message overwrites the previous
/// one, and `None` hides the area entirely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self { text: text.into(), severity: Severity::Info }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), severity: Severity::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), severity: Severity::Error }
    }
}
