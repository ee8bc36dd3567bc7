//! Ticket completion stream over Server-Sent Events (SSE).
//!
//! The gateway emits one named event per completed ticket. The connection
//! is an explicitly owned [`TicketFeed`] handle: constructing it subscribes,
//! dropping it removes the listeners and closes the `EventSource`. Callers
//! tie the handle's lifetime to the owning component instead of leaking a
//! process-wide connection.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventSource, MessageEvent};

use crate::config::TICKET_EVENT;
use crate::types::{AppError, AppResult, TicketEvent};

/// Live subscription to the gateway's ticket stream.
pub struct TicketFeed {
    source: EventSource,
    on_ticket: Closure<dyn FnMut(MessageEvent)>,
    _on_open: Closure<dyn FnMut(web_sys::Event)>,
    _on_error: Closure<dyn FnMut(web_sys::Event)>,
}

impl TicketFeed {
    /// Opens the stream at `url` and delivers each ticket identifier, in
    /// arrival order, to `deliver`. Malformed events are logged and skipped.
    pub fn connect(url: &str, mut deliver: impl FnMut(String) + 'static) -> AppResult<Self> {
        let source = EventSource::new(url)
            .map_err(|e| AppError::Channel(format!("Failed to open {}: {:?}", url, e)))?;

        let on_ticket = Closure::wrap(Box::new(move |event: MessageEvent| {
            if let Some(data) = event.data().as_string() {
                match serde_json::from_str::<TicketEvent>(&data) {
                    Ok(payload) => deliver(payload.ticket_number.to_string()),
                    Err(e) => log::warn!("Discarding malformed ticket event: {}", e),
                }
            }
        }) as Box<dyn FnMut(MessageEvent)>);

        source
            .add_event_listener_with_callback(TICKET_EVENT, on_ticket.as_ref().unchecked_ref())
            .map_err(|e| AppError::Channel(format!("Failed to subscribe: {:?}", e)))?;

        let on_open = Closure::wrap(Box::new(move |_: web_sys::Event| {
            log::info!("📡 Ticket stream connected");
        }) as Box<dyn FnMut(web_sys::Event)>);
        source.set_onopen(Some(on_open.as_ref().unchecked_ref()));

        // EventSource reconnects on its own; no policy is layered on top.
        let on_error = Closure::wrap(Box::new(move |_: web_sys::Event| {
            log::warn!("Ticket stream error - waiting for auto-reconnect");
        }) as Box<dyn FnMut(web_sys::Event)>);
        source.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        Ok(Self {
            source,
            on_ticket,
            _on_open: on_open,
            _on_error: on_error,
        })
    }
}

impl Drop for TicketFeed {
    fn drop(&mut self) {
        let _ = self
            .source
            .remove_event_listener_with_callback(TICKET_EVENT, self.on_ticket.as_ref().unchecked_ref());
        self.source.set_onopen(None);
        self.source.set_onerror(None);
        self.source.close();
        log::info!("📡 Ticket stream closed");
    }
}
