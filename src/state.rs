//! Session state machine for the backup workflow.
//!
//! Every flag the UI renders from lives in [`SessionState`], and every
//! transition the components perform goes through a method here. The struct
//! is generic over the file handle type: the components instantiate it with
//! `web_sys::File`, the tests with `String`, so the workflow rules run
//! natively without a DOM.
//!
//! Workflow: select CSV + ZIP → submit → (locked) → run backup →
//! completion dialog + streamed tickets → close → back to the initial state.

use crate::config::{MSG_SELECT_BOTH, MSG_UPLOAD_FAILED, MSG_UPLOAD_OK};

/// Which of the two selectable files an operation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Csv,
    Zip,
}

/// A picked file together with its display name.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile<F> {
    pub name: String,
    pub handle: F,
}

/// Complete client-side state of one backup session.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState<F> {
    pub csv: Option<SelectedFile<F>>,
    pub zip: Option<SelectedFile<F>>,
    /// Status line under the form; empty until something happened.
    pub status: String,
    /// True once the gateway accepted the upload. While set, the file
    /// pickers and remove buttons are non-interactive.
    pub locked: bool,
    /// True while the start-job request is outstanding.
    pub job_running: bool,
    pub dialog_open: bool,
    /// Completed tickets in arrival order. Duplicates are kept.
    pub tickets: Vec<String>,
}

impl<F> Default for SessionState<F> {
    fn default() -> Self {
        Self {
            csv: None,
            zip: None,
            status: String::new(),
            locked: false,
            job_running: false,
            dialog_open: false,
            tickets: Vec::new(),
        }
    }
}

impl<F> SessionState<F> {
    /// Replaces the selection for `kind` and clears any prior upload
    /// outcome, so a re-pick after success starts a fresh attempt.
    pub fn select_file(&mut self, kind: FileKind, name: impl Into<String>, handle: F) {
        let selected = SelectedFile {
            name: name.into(),
            handle,
        };
        match kind {
            FileKind::Csv => self.csv = Some(selected),
            FileKind::Zip => self.zip = Some(selected),
        }
        self.status.clear();
        self.locked = false;
    }

    /// Clears the selection for `kind`. No-op once the session is locked.
    pub fn remove_file(&mut self, kind: FileKind) {
        if self.locked {
            return;
        }
        match kind {
            FileKind::Csv => self.csv = None,
            FileKind::Zip => self.zip = None,
        }
    }

    /// True when submit must fail fast without touching the network.
    pub fn missing_files(&self) -> bool {
        self.csv.is_none() || self.zip.is_none()
    }

    /// Sets the "select both files" validation message.
    pub fn set_validation_message(&mut self) {
        self.status = MSG_SELECT_BOTH.to_string();
    }

    /// Records the outcome of the upload request. Success locks the
    /// selections; failure leaves them editable for a retry.
    pub fn record_upload(&mut self, ok: bool) {
        if ok {
            self.status = MSG_UPLOAD_OK.to_string();
            self.locked = true;
        } else {
            self.status = MSG_UPLOAD_FAILED.to_string();
            self.locked = false;
        }
    }

    /// Guard for the backup trigger: requires a successful upload and no
    /// outstanding job request.
    pub fn can_start_job(&self) -> bool {
        self.locked && !self.job_running
    }

    /// Marks the job request outstanding. Returns false (and does nothing)
    /// when the guard fails.
    pub fn begin_job(&mut self) -> bool {
        if !self.can_start_job() {
            return false;
        }
        self.job_running = true;
        true
    }

    /// Clears the outstanding flag; opens the completion dialog only when
    /// the request succeeded. A failure keeps the session retryable.
    pub fn finish_job(&mut self, ok: bool) {
        self.job_running = false;
        if ok {
            self.dialog_open = true;
        }
    }

    /// Appends one streamed ticket identifier. Arrival order is preserved
    /// and duplicates are not collapsed.
    pub fn push_ticket(&mut self, id: impl Into<String>) {
        self.tickets.push(id.into());
    }

    /// Returns the session to its exact initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pick(state: &mut SessionState<String>, kind: FileKind, name: &str) {
        state.select_file(kind, name, name.to_string());
    }

    #[test]
    fn test_submit_with_missing_file_short_circuits() {
        let mut state = SessionState::<String>::default();
        pick(&mut state, FileKind::Csv, "a.csv");

        assert!(state.missing_files());
        state.set_validation_message();

        assert_eq!(state.status, MSG_SELECT_BOTH);
        assert!(!state.locked);
    }

    #[test]
    fn test_submit_with_no_files_short_circuits() {
        let state = SessionState::<String>::default();
        assert!(state.missing_files());
    }

    #[test]
    fn test_successful_upload_locks_selections() {
        let mut state = SessionState::<String>::default();
        pick(&mut state, FileKind::Csv, "a.csv");
        pick(&mut state, FileKind::Zip, "b.zip");
        assert!(!state.missing_files());

        state.record_upload(true);
        assert_eq!(state.status, MSG_UPLOAD_OK);
        assert!(state.locked);

        // Removal is a no-op while locked.
        state.remove_file(FileKind::Csv);
        state.remove_file(FileKind::Zip);
        assert!(state.csv.is_some());
        assert!(state.zip.is_some());
    }

    #[test]
    fn test_failed_upload_stays_editable() {
        let mut state = SessionState::<String>::default();
        pick(&mut state, FileKind::Csv, "a.csv");
        pick(&mut state, FileKind::Zip, "b.zip");

        state.record_upload(false);
        assert_eq!(state.status, MSG_UPLOAD_FAILED);
        assert!(!state.locked);

        state.remove_file(FileKind::Zip);
        assert!(state.zip.is_none());
    }

    #[test]
    fn test_repick_after_success_clears_outcome() {
        let mut state = SessionState::<String>::default();
        pick(&mut state, FileKind::Csv, "a.csv");
        pick(&mut state, FileKind::Zip, "b.zip");
        state.record_upload(true);

        pick(&mut state, FileKind::Csv, "c.csv");
        assert!(state.status.is_empty());
        assert!(!state.locked);
        assert_eq!(state.csv.as_ref().unwrap().name, "c.csv");
    }

    #[test]
    fn test_job_trigger_guard() {
        let mut state = SessionState::<String>::default();
        assert!(!state.can_start_job());
        assert!(!state.begin_job());

        pick(&mut state, FileKind::Csv, "a.csv");
        pick(&mut state, FileKind::Zip, "b.zip");
        state.record_upload(true);
        assert!(state.can_start_job());

        assert!(state.begin_job());
        // Disabled while the request is outstanding.
        assert!(!state.can_start_job());
        assert!(!state.begin_job());
    }

    #[test]
    fn test_job_failure_allows_retry_without_dialog() {
        let mut state = SessionState::<String>::default();
        pick(&mut state, FileKind::Csv, "a.csv");
        pick(&mut state, FileKind::Zip, "b.zip");
        state.record_upload(true);

        assert!(state.begin_job());
        state.finish_job(false);

        assert!(!state.dialog_open);
        assert!(!state.job_running);
        assert!(state.can_start_job());
    }

    #[test]
    fn test_tickets_keep_arrival_order_and_duplicates() {
        let mut state = SessionState::<String>::default();
        for id in ["101", "102", "101", "103"] {
            state.push_ticket(id);
        }
        assert_eq!(state.tickets, vec!["101", "102", "101", "103"]);
    }

    #[test]
    fn test_reset_restores_initial_state_from_anywhere() {
        let mut state = SessionState::<String>::default();
        pick(&mut state, FileKind::Csv, "a.csv");
        pick(&mut state, FileKind::Zip, "b.zip");
        state.record_upload(true);
        state.begin_job();
        state.finish_job(true);
        state.push_ticket("101");

        state.reset();
        assert_eq!(state, SessionState::default());
    }

    #[test]
    fn test_full_backup_scenario() {
        let mut state = SessionState::<String>::default();

        pick(&mut state, FileKind::Csv, "a.csv");
        pick(&mut state, FileKind::Zip, "b.zip");
        assert!(!state.missing_files());

        state.record_upload(true);
        assert!(state.locked);
        assert_eq!(state.status, MSG_UPLOAD_OK);

        assert!(state.begin_job());
        state.finish_job(true);
        assert!(state.dialog_open);

        state.push_ticket("101");
        state.push_ticket("102");
        assert_eq!(state.tickets, vec!["101", "102"]);

        state.reset();
        assert!(state.csv.is_none());
        assert!(state.zip.is_none());
        assert!(state.status.is_empty());
        assert!(!state.locked);
        assert!(!state.dialog_open);
        assert!(state.tickets.is_empty());
    }
}
