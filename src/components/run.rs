//! Backup job trigger.
//!
//! The button is reachable only after a successful upload, and disables
//! itself while the request is outstanding. A transport failure is logged
//! and leaves the session where it was so the user can retry.

use leptos::*;
use web_sys::File;

use crate::config::GATEWAY_URL;
use crate::services::start_backup;
use crate::state::SessionState;

#[component]
pub fn RunPanel(session: RwSignal<SessionState<File>>) -> impl IntoView {
    let on_run = move |_| {
        let mut started = false;
        session.update(|s| started = s.begin_job());
        if !started {
            return;
        }

        spawn_local(async move {
            log::info!("🚀 Starting backup job");
            let ok = match start_backup(GATEWAY_URL).await {
                Ok(()) => true,
                Err(e) => {
                    log::error!("❌ Backup trigger failed: {}", e);
                    false
                }
            };
            session.update(|s| s.finish_job(ok));
        });
    };

    view! {
        <div class="run-panel">
            <button
                class="run-button"
                disabled=move || !session.with(|s| s.can_start_job())
                on:click=on_run
            >
                {move || if session.with(|s| s.job_running) {
                    "⏳ Running backup..."
                } else {
                    "Run Backup"
                }}
            </button>
        </div>
    }
}
