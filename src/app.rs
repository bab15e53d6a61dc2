//! Root application component.

use leptos::prelude::*;

use crate::pages::login::LoginPage;

/// Application shell. The portal is a single screen, so the shell only
/// establishes the page chrome around the login flow.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app-shell">
            <LoginPage/>
        </main>
    }
}
