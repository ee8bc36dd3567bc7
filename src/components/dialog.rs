//! Completion dialog and session reset.
//!
//! Closing the dialog notifies the gateway and returns the whole session
//! to its initial state. The reset is unconditional: a failing close call
//! is logged but never leaves the dialog stuck open.

use leptos::*;
use web_sys::File;

use crate::config::GATEWAY_URL;
use crate::services::close_session;
use crate::state::SessionState;

#[component]
pub fn CompletionDialog(session: RwSignal<SessionState<File>>) -> impl IntoView {
    let on_close = move |_| {
        spawn_local(async move {
            if let Err(e) = close_session(GATEWAY_URL).await {
                log::warn!("close-session failed: {}", e);
            }
            session.update(|s| s.reset());
        });
    };

    view! {
        <Show
            when=move || session.with(|s| s.dialog_open)
            fallback=|| view! { }
        >
            <div class="modal-overlay">
                <div class="modal">
                    <h2>"Backup Complete"</h2>
                    <p>"The backup job finished successfully."</p>
                    <button class="modal-close" on:click=on_close>
                        "Finish"
                    </button>
                </div>
            </div>
        </Show>
    }
}
