//! Application title bar

use leptos::*;

use crate::config::APP_NAME;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <a href="#" class="logo">{APP_NAME}</a>
            <span class="subtitle">"Ticket attachment backup"</span>
        </header>
    }
}
