//! UI Components for the backup application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Application title bar
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadForm`] - CSV + ZIP selection and upload
//! - [`RunPanel`] - Backup job trigger
//! - [`TicketList`] - Completed tickets streamed from the gateway
//! - [`CompletionDialog`] - End-of-job dialog and session reset

mod header;
mod upload;
mod run;
mod tickets;
mod dialog;
mod footer;

pub use header::*;
pub use upload::*;
pub use run::*;
pub use tickets::*;
pub use dialog::*;
pub use footer::*;
