use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::ContactError;

pub(crate) const MESSAGE_MAX_CHARS: usize = 2000;

/// Input fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub(crate) const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    pub(crate) fn placeholder(self) -> &'static str {
        match self {
            ContactField::Name => "Your name",
            ContactField::Email => "you@example.com",
            ContactField::Subject => "What is this about?",
            ContactField::Message => "Tell us about your project",
        }
    }
}

/// Unsubmitted form contents, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ContactDraft {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) subject: String,
    pub(crate) message: String,
}

impl ContactDraft {
    pub(crate) fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub(crate) fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Check every field, collecting one error per failing field in form
    /// order.
    pub(crate) fn validate(&self) -> Result<(), Vec<ContactError>> {
        let errors: Vec<ContactError> = ContactField::ALL
            .into_iter()
            .filter_map(|field| validate_field(field, self.value(field)))
            .collect();

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn validate_field(field: ContactField, value: &str) -> Option<ContactError> {
    let value = value.trim();
    if value.is_empty() {
        return Some(ContactError::validation(
            field,
            format!("{} is required", field.label()),
        ));
    }

    match field {
        ContactField::Email if !is_plausible_email(value) => Some(
            ContactError::validation(field, "Enter a valid email address"),
        ),
        ContactField::Message
            if value.chars().count() > MESSAGE_MAX_CHARS =>
        {
            Some(ContactError::validation(
                field,
                format!("Message must be at most {MESSAGE_MAX_CHARS} characters"),
            ))
        },
        _ => None,
    }
}

/// One `@`, a non-empty local part and a dotted domain.
fn is_plausible_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.contains('@') && domain.contains('.')
        },
        None => false,
    }
}

/// Submission progress of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) enum ContactStatus {
    #[default]
    Idle,
    Submitting,
    Sent,
    Failed(String),
}

/// A validated, timestamped inquiry as stored in the outbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Inquiry {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) subject: String,
    pub(crate) message: String,
    pub(crate) received_at: DateTime<Utc>,
}

impl Inquiry {
    /// Trimmed copy of `draft` stamped with `received_at`.
    pub(crate) fn from_draft(
        draft: &ContactDraft,
        received_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
            subject: draft.subject.trim().to_string(),
            message: draft.message.trim().to_string(),
            received_at,
        }
    }
}

/// Read-only view data for the contact form.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ContactViewModel<'a> {
    pub(crate) draft: &'a ContactDraft,
    pub(crate) status: &'a ContactStatus,
    pub(crate) errors: &'a [(ContactField, String)],
}

impl<'a> ContactViewModel<'a> {
    pub(crate) fn error(&self, field: ContactField) -> Option<&'a str> {
        self.errors
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, message)| message.as_str())
    }

    pub(crate) fn is_submitting(&self) -> bool {
        *self.status == ContactStatus::Submitting
    }
}
