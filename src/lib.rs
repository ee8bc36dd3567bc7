//! Ticket Backup - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that drives a remote backup gateway: upload a
//! CSV + ZIP pair, trigger the backup job, and watch ticket completion
//! events stream in.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header                                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── UploadForm (CSV + ZIP selection, submit)               │
//! │  ├── RunPanel (backup trigger)                              │
//! │  ├── TicketList (streamed completions)                      │
//! │  └── CompletionDialog (session reset)                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Gateway endpoints and UI strings
//! - [`types`] - Wire payloads and error types
//! - [`state`] - The session state machine
//! - [`components`] - UI components
//! - [`services`] - Gateway communication (HTTP + SSE)

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;
use web_sys::File;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{AppError, AppResult, TicketEvent, TicketNumber, UploadResponse};

// State machine
pub use state::{FileKind, SelectedFile, SessionState};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Ticket Backup - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // The whole workflow state lives in one signal; every component
    // transitions it through the SessionState methods.
    let session = create_rw_signal(SessionState::<File>::default());

    // The ticket stream lives exactly as long as this component: the
    // handle is stored on mount and dropped (unsubscribe + close) on
    // cleanup.
    let feed = store_value(None::<TicketFeed>);
    let events_url = format!("{}{}", GATEWAY_URL, EVENTS_PATH);
    match TicketFeed::connect(&events_url, move |id| {
        session.update(|s| s.push_ticket(id));
    }) {
        Ok(handle) => feed.set_value(Some(handle)),
        Err(e) => log::error!("❌ {}", e),
    }
    on_cleanup(move || feed.set_value(None));

    view! {
        <Header/>

        <div class="container">
            <div class="card">
                <UploadForm session=session/>
                <RunPanel session=session/>
                <TicketList session=session/>
            </div>
        </div>

        <CompletionDialog session=session/>
        <Footer/>
    }
}
