//! Two-step login page: password submission followed by a 6-digit MFA code.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the whole portal surface. The page drives three mutually exclusive
//! panels (login, MFA entry, success), issues the two authentication calls,
//! and owns the single status-message slot.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::message_banner::MessageBanner;
use crate::net::api::ApiError;
use crate::state::flow::{Panel, StatusMessage};
use crate::util::validate::{validate_credentials, validate_mfa_code};

/// What the UI must do after a failed attempt. Classified as pure data so
/// the mapping from an [`ApiError`] to visible behavior is testable natively.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Debug, PartialEq, Eq)]
struct FailureEffects {
    /// Message to show in the banner.
    message: StatusMessage,
    /// Whether to clear and refocus the code input for re-entry.
    clear_code: bool,
    /// Transport cause to log, when the request itself failed.
    log_cause: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
fn credentials_failure_effects(err: ApiError) -> FailureEffects {
    match err {
        ApiError::Rejected(text) => FailureEffects {
            message: StatusMessage::error(text),
            clear_code: false,
            log_cause: None,
        },
        ApiError::Transport(cause) => FailureEffects {
            message: StatusMessage::error(
                "Connection error. Please make sure the backend is running.",
            ),
            clear_code: false,
            log_cause: Some(cause),
        },
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn verification_failure_effects(err: ApiError) -> FailureEffects {
    match err {
        ApiError::Rejected(text) => FailureEffects {
            message: StatusMessage::error(text),
            clear_code: true,
            log_cause: None,
        },
        ApiError::Transport(cause) => FailureEffects {
            message: StatusMessage::error("Connection error. Please try again."),
            clear_code: false,
            log_cause: Some(cause),
        },
    }
}

/// Login page — collects credentials, then the MFA code, then lands on the
/// signed-in panel. Each submit control disables itself while its request is
/// in flight and re-enables only on failure.
#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let message = RwSignal::new(None::<StatusMessage>);
    let panel = RwSignal::new(Panel::Login);
    let login_busy = RwSignal::new(false);
    let mfa_busy = RwSignal::new(false);
    // Username recorded after the password is accepted, attached to the
    // MFA verification call.
    let verified_username = RwSignal::new(String::new());

    let password_ref = NodeRef::<leptos::html::Input>::new();
    let code_ref = NodeRef::<leptos::html::Input>::new();

    let on_submit_credentials = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if login_busy.get() {
            return;
        }
        let (user, pass) = match validate_credentials(&username.get(), &password.get()) {
            Ok(pair) => pair,
            Err(msg) => {
                message.set(Some(StatusMessage::error(msg)));
                return;
            }
        };
        login_busy.set(true);
        message.set(Some(StatusMessage::info("Authenticating...")));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&user, &pass).await {
                Ok(()) => {
                    verified_username.set(user);
                    message.set(Some(StatusMessage::success(
                        "Password correct! Please enter your MFA code.",
                    )));
                    panel.set(Panel::Mfa);
                    if let Some(input) = code_ref.get() {
                        let _ = input.focus();
                    }
                }
                Err(err) => {
                    let effects = credentials_failure_effects(err);
                    if let Some(cause) = effects.log_cause {
                        log::error!("login request failed: {cause}");
                    }
                    message.set(Some(effects.message));
                    login_busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (user, pass);
    };

    let on_submit_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if mfa_busy.get() {
            return;
        }
        let code_value = match validate_mfa_code(&code.get()) {
            Ok(value) => value,
            Err(msg) => {
                message.set(Some(StatusMessage::error(msg)));
                return;
            }
        };
        mfa_busy.set(true);
        message.set(Some(StatusMessage::info("Verifying MFA code...")));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let user = verified_username.get_untracked();
            match crate::net::api::verify_mfa(&user, &code_value).await {
                Ok(()) => {
                    message.set(Some(StatusMessage::success("MFA verification successful!")));
                    gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                    message.set(None);
                    panel.set(Panel::Success);
                }
                Err(err) => {
                    let effects = verification_failure_effects(err);
                    if let Some(cause) = effects.log_cause {
                        log::error!("MFA verification failed: {cause}");
                    }
                    if effects.clear_code {
                        code.set(String::new());
                        if let Some(input) = code_ref.get() {
                            let _ = input.focus();
                        }
                    }
                    message.set(Some(effects.message));
                    mfa_busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = code_value;
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"MFA Portal"</h1>
                <MessageBanner message=message/>
                <section class="panel" class:hidden=move || panel.get() != Panel::Login>
                    <form class="login-form" on:submit=on_submit_credentials>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    if let Some(input) = password_ref.get() {
                                        let _ = input.focus();
                                    }
                                }
                            }
                        />
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Password"
                            node_ref=password_ref
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button class="login-button" type="submit" disabled=move || login_busy.get()>
                            "Sign In"
                        </button>
                    </form>
                </section>
                <section class="panel" class:hidden=move || panel.get() != Panel::Mfa>
                    <p class="panel__subtitle">"Enter the 6-digit code from your authenticator app."</p>
                    <form class="login-form" on:submit=on_submit_code>
                        <input
                            class="login-input login-input--code"
                            type="text"
                            inputmode="numeric"
                            maxlength="6"
                            placeholder="123456"
                            node_ref=code_ref
                            prop:value=move || code.get()
                            on:input=move |ev| code.set(event_target_value(&ev))
                        />
                        <button class="login-button" type="submit" disabled=move || mfa_busy.get()>
                            "Verify Code"
                        </button>
                    </form>
                </section>
                <section class="panel" class:hidden=move || panel.get() != Panel::Success>
                    <h2>"Login successful!"</h2>
                    <p>
                        "Signed in as "
                        <span class="panel__username">{move || verified_username.get()}</span>
                    </p>
                </section>
            </div>
        </div>
    }
}
