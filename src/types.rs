//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **API Types** - Gateway response structures
//! - **Event Types** - Ticket stream payloads
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// API Response Types
// =============================================================================

/// Response from the gateway upload endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Human-readable acknowledgement from the gateway.
    pub message: String,
}

// =============================================================================
// Event Types
// =============================================================================

/// Payload of one `ticket-updated` event on the stream.
#[derive(Clone, Debug, Deserialize)]
pub struct TicketEvent {
    pub ticket_number: TicketNumber,
}

/// Ticket identifier as delivered by the gateway.
///
/// The gateway forwards raw CSV cell values, so an identifier may arrive
/// as an integer, a float, or a string. Normalized with [`fmt::Display`]
/// before entering the ticket list.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum TicketNumber {
    Int(u64),
    Float(f64),
    Text(String),
}

impl fmt::Display for TicketNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketNumber::Int(n) => write!(f, "{}", n),
            // CSV numerics come through as e.g. 101.0; show the integer part
            // when the value is whole.
            TicketNumber::Float(x) if x.fract() == 0.0 => write!(f, "{}", *x as i64),
            TicketNumber::Float(x) => write!(f, "{}", x),
            TicketNumber::Text(s) => write!(f, "{}", s),
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug)]
pub enum AppError {
    /// File upload failed.
    Upload(String),
    /// Backup job trigger failed.
    Job(String),
    /// Ticket event stream failed.
    Channel(String),
    /// Network/HTTP error.
    Network(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Upload(msg) => write!(f, "Upload error: {}", msg),
            AppError::Job(msg) => write!(f, "Job error: {}", msg),
            AppError::Channel(msg) => write!(f, "Channel error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_event_integer() {
        let event: TicketEvent = serde_json::from_str(r#"{"ticket_number": 101}"#).unwrap();
        assert_eq!(event.ticket_number.to_string(), "101");
    }

    #[test]
    fn test_ticket_event_float_is_normalized() {
        let event: TicketEvent = serde_json::from_str(r#"{"ticket_number": 4711.0}"#).unwrap();
        assert_eq!(event.ticket_number.to_string(), "4711");
    }

    #[test]
    fn test_ticket_event_string() {
        let event: TicketEvent =
            serde_json::from_str(r#"{"ticket_number": "INC-2024-17"}"#).unwrap();
        assert_eq!(event.ticket_number.to_string(), "INC-2024-17");
    }

    #[test]
    fn test_upload_response_deserialization() {
        let json = r#"{"message": "Files received and unpacked successfully"}"#;
        let response: UploadResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.message, "Files received and unpacked successfully");
    }
}
