//! Completed tickets panel.
//!
//! Renders the identifiers streamed from the gateway, in arrival order.

use leptos::*;
use web_sys::File;

use crate::state::SessionState;

#[component]
pub fn TicketList(session: RwSignal<SessionState<File>>) -> impl IntoView {
    view! {
        <div class="ticket-panel">
            <div class="ticket-header">"Backed-up Tickets"</div>
            <div class="ticket-content">
                <Show
                    when=move || session.with(|s| !s.tickets.is_empty())
                    fallback=|| view! {
                        <div class="ticket-empty">"No tickets backed up yet."</div>
                    }
                >
                    <For
                        each=move || session.with(|s| s.tickets.clone()).into_iter().enumerate()
                        key=|(i, _)| *i
                        children=move |(_, ticket)| {
                            view! {
                                <div class="ticket-entry">"Ticket " {ticket}</div>
                            }
                        }
                    />
                </Show>
            </div>
        </div>
    }
}
