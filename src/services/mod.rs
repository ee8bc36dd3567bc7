//! Gateway communication services.
//!
//! This module provides services for external communication:
//!
//! # Services
//!
//! - [`gateway`] - HTTP operations: submit files, start backup, close session
//! - [`events`] - SSE subscription for ticket completion events

pub mod gateway;
pub mod events;

pub use gateway::*;
pub use events::*;
