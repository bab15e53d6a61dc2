//! The single transient status-message area shown above the active panel.

use leptos::prelude::*;

use crate::state::flow::StatusMessage;

/// Message banner. Renders nothing while no message is set; the severity
/// picks the CSS modifier.
#[component]
pub fn MessageBanner(message: RwSignal<Option<StatusMessage>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class=move || {
                let severity = message.get().map_or("info", |m| m.severity.css_class());
                format!("message message--{severity}")
            }>
                {move || message.get().map(|m| m.text).unwrap_or_default()}
            </p>
        </Show>
    }
}
