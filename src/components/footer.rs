//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div><span class="rust-badge">"Ticket Backup"</span> " • attachment backup for the service desk"</div>
        </footer>
    }
}
