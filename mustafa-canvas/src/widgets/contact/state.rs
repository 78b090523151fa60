use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::model::{ContactDraft, ContactField, ContactStatus, Inquiry};
use super::sink::InquirySink;

/// Contact form draft, submission status and delivery target.
pub(super) struct ContactState {
    draft: ContactDraft,
    status: ContactStatus,
    errors: Vec<(ContactField, String)>,
    sink: Arc<dyn InquirySink>,
}

impl ContactState {
    pub(super) fn new(sink: Arc<dyn InquirySink>) -> Self {
        Self {
            draft: ContactDraft::default(),
            status: ContactStatus::Idle,
            errors: Vec::new(),
            sink,
        }
    }

    pub(super) fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub(super) fn status(&self) -> &ContactStatus {
        &self.status
    }

    pub(super) fn errors(&self) -> &[(ContactField, String)] {
        &self.errors
    }

    pub(super) fn sink(&self) -> Arc<dyn InquirySink> {
        Arc::clone(&self.sink)
    }

    /// Store a field edit, dropping its error and any finished status.
    ///
    /// The draft is frozen while a submission is in flight.
    pub(super) fn edit(&mut self, field: ContactField, value: String) {
        if self.status == ContactStatus::Submitting {
            return;
        }
        self.draft.set(field, value);
        self.errors.retain(|(candidate, _)| *candidate != field);
        if matches!(self.status, ContactStatus::Sent | ContactStatus::Failed(_))
        {
            self.status = ContactStatus::Idle;
        }
    }

    /// Validate the draft and move to `Submitting`.
    ///
    /// Returns the inquiry to deliver, or `None` when a submission is
    /// already running or validation failed.
    pub(super) fn begin_submit(
        &mut self,
        received_at: DateTime<Utc>,
    ) -> Option<Inquiry> {
        if self.status == ContactStatus::Submitting {
            return None;
        }

        match self.draft.validate() {
            Ok(()) => {
                self.errors.clear();
                self.status = ContactStatus::Submitting;
                Some(Inquiry::from_draft(&self.draft, received_at))
            },
            Err(errors) => {
                self.errors = errors
                    .iter()
                    .filter_map(|error| error.field_message())
                    .map(|(field, message)| (field, message.to_string()))
                    .collect();
                self.status = ContactStatus::Idle;
                None
            },
        }
    }

    pub(super) fn complete(&mut self) {
        self.draft = ContactDraft::default();
        self.status = ContactStatus::Sent;
    }

    pub(super) fn fail(&mut self, message: String) {
        self.status = ContactStatus::Failed(message);
    }
}
