//! CSV + ZIP upload form.
//!
//! Handles file selection, validation, upload to the gateway, and the
//! locked state after a successful upload.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, File, HtmlInputElement};

use crate::config::GATEWAY_URL;
use crate::services::submit_files;
use crate::state::{FileKind, SessionState};

#[component]
pub fn UploadForm(session: RwSignal<SessionState<File>>) -> impl IntoView {
    let (is_uploading, set_is_uploading) = create_signal(false);

    let locked = move || session.with(|s| s.locked);

    // One handler per input kind; replaces the selection and clears any
    // prior upload outcome.
    let on_file_change = move |kind: FileKind| {
        move |ev: Event| {
            let input: HtmlInputElement = event_target(&ev);
            if let Some(files) = input.files() {
                if let Some(file) = files.get(0) {
                    session.update(|s| s.select_file(kind, file.name(), file));
                }
            }
            // Clear the input so re-picking the same file fires again.
            input.set_value("");
        }
    };

    let on_submit = move |_| {
        if locked() || is_uploading.get() {
            return;
        }

        let (csv, zip) = match session.with(|s| (s.csv.clone(), s.zip.clone())) {
            (Some(csv), Some(zip)) => (csv, zip),
            _ => {
                // Fail fast, no network call.
                session.update(|s| s.set_validation_message());
                return;
            }
        };

        spawn_local(async move {
            set_is_uploading.set(true);
            log::info!("📤 Uploading {} and {}", csv.name, zip.name);

            match submit_files(&csv.handle, &zip.handle, GATEWAY_URL).await {
                Ok(response) => {
                    log::info!("✅ {}", response.message);
                    session.update(|s| s.record_upload(true));
                }
                Err(e) => {
                    log::error!("❌ Upload failed: {}", e);
                    session.update(|s| s.record_upload(false));
                }
            }

            set_is_uploading.set(false);
        });
    };

    // Trigger the hidden input behind a label-styled button.
    let trigger_input = move |id: &'static str| {
        move |_| {
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    if let Some(input) = document.get_element_by_id(id) {
                        if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                            html_input.click();
                        }
                    }
                }
            }
        }
    };

    view! {
        <div class="upload-form">
            <input
                type="file"
                id="csvInput"
                accept=".csv"
                style="display:none"
                disabled=locked
                on:change=on_file_change(FileKind::Csv)
            />
            <button class="file-button" disabled=locked on:click=trigger_input("csvInput")>
                "Choose CSV"
            </button>

            <input
                type="file"
                id="zipInput"
                accept=".zip"
                style="display:none"
                disabled=locked
                on:change=on_file_change(FileKind::Zip)
            />
            <button class="file-button" disabled=locked on:click=trigger_input("zipInput")>
                "Choose ZIP"
            </button>

            <button
                class="submit-button"
                disabled=move || locked() || is_uploading.get()
                on:click=on_submit
            >
                {move || if is_uploading.get() { "⏳ Uploading..." } else { "Attach" }}
            </button>

            <Show
                when=move || session.with(|s| !s.status.is_empty())
                fallback=|| view! { }
            >
                <div class="status-line">
                    {move || session.with(|s| s.status.clone())}
                </div>
            </Show>

            <div class="selected-files">
                <FileChip session=session kind=FileKind::Csv label="CSV"/>
                <FileChip session=session kind=FileKind::Zip label="ZIP"/>
            </div>
        </div>
    }
}

/// One selected-file row: name plus a remove button that turns into a
/// check mark once the session is locked.
#[component]
fn FileChip(
    session: RwSignal<SessionState<File>>,
    kind: FileKind,
    label: &'static str,
) -> impl IntoView {
    let name = move || {
        session.with(|s| {
            let selected = match kind {
                FileKind::Csv => &s.csv,
                FileKind::Zip => &s.zip,
            };
            selected.as_ref().map(|f| f.name.clone())
        })
    };

    view! {
        <Show
            when=move || name().is_some()
            fallback=|| view! { }
        >
            <div class="file-chip" class:locked=move || session.with(|s| s.locked)>
                <span>{label} ": " {move || name().unwrap_or_default()}</span>
                <button
                    class="file-remove"
                    disabled=move || session.with(|s| s.locked)
                    on:click=move |_| session.update(|s| s.remove_file(kind))
                >
                    {move || if session.with(|s| s.locked) { "✓" } else { "✕" }}
                </button>
            </div>
        </Show>
    }
}
