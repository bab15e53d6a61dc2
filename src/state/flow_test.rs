use super::*;

#[test]
fn panel_defaults_to_login() {
    assert_eq!(Panel::default(), Panel::Login);
}

#[test]
fn severity_maps_to_css_class() {
    assert_eq!(Severity::Info.css_class(), "info");
    assert_eq!(Severity::Success.css_class(), "success");
    assert_eq!(Severity::Error.css_class(), "error");
}

#[test]
fn status_message_constructors_set_severity() {
    assert_eq!(StatusMessage::info("a").severity, Severity::Info);
    assert_eq!(StatusMessage::success("b").severity, Severity::Success);
    let err = StatusMessage::error("Invalid code");
    assert_eq!(err.severity, Severity::Error);
    assert_eq!(err.text, "Invalid code");
}
