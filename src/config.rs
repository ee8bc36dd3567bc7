//! Application configuration.
//!
//! Centralized configuration for the backup frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Gateway base URL.
///
/// The backup gateway serving the upload, process and close endpoints
/// plus the ticket event stream.
pub const GATEWAY_URL: &str = "http://localhost:5000";

/// Multipart upload endpoint (CSV + ZIP pair).
pub const UPLOAD_PATH: &str = "/upload";

/// Backup job trigger endpoint.
pub const PROCESS_PATH: &str = "/process";

/// Session close endpoint.
pub const CLOSE_PATH: &str = "/close";

/// SSE endpoint carrying ticket completion events.
pub const EVENTS_PATH: &str = "/events";

/// Named SSE event for a completed ticket.
pub const TICKET_EVENT: &str = "ticket-updated";

/// Application name shown in the header.
pub const APP_NAME: &str = "Ticket Backup";

// User-facing status messages. The state machine sets these verbatim so
// the tests can assert on them.

/// Shown when submit is pressed with a missing file. No request is sent.
pub const MSG_SELECT_BOTH: &str = "Please select both the CSV and ZIP files.";

/// Shown after the gateway accepted both files.
pub const MSG_UPLOAD_OK: &str = "Upload completed successfully.";

/// Shown when the upload request failed.
pub const MSG_UPLOAD_FAILED: &str = "File upload failed.";
