use std::sync::Arc;

use chrono::{DateTime, Utc};
use iced::Task;

use super::event::{ContactEffect, ContactEvent, ContactIntent};
use super::model::{ContactStatus, Inquiry};
use super::sink::InquirySink;
use super::state::ContactState;

/// Clock reading used to stamp submitted inquiries.
pub(crate) struct ContactCtx {
    pub(crate) now: DateTime<Utc>,
}

/// Reduce a contact intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut ContactState,
    event: ContactIntent,
    ctx: &ContactCtx,
) -> Task<ContactEvent> {
    match event {
        ContactIntent::FieldChanged(field, value) => {
            state.edit(field, value);
            Task::none()
        },
        ContactIntent::Submit => match state.begin_submit(ctx.now) {
            Some(inquiry) => request_delivery(state.sink(), inquiry),
            None => Task::none(),
        },
        ContactIntent::DeliveryCompleted => {
            if *state.status() == ContactStatus::Submitting {
                state.complete();
            }
            Task::none()
        },
        ContactIntent::DeliveryFailed(message) => {
            if *state.status() == ContactStatus::Submitting {
                state.fail(message);
            }
            Task::none()
        },
    }
}

fn request_delivery(
    sink: Arc<dyn InquirySink>,
    inquiry: Inquiry,
) -> Task<ContactEvent> {
    Task::perform(deliver_blocking(sink, inquiry), |result| match result {
        Ok(inquiry) => ContactEvent::Effect(ContactEffect::Delivered(inquiry)),
        Err(message) => {
            ContactEvent::Effect(ContactEffect::DeliveryFailed(message))
        },
    })
}

/// Run the sink on the blocking pool so file IO stays off the executor.
async fn deliver_blocking(
    sink: Arc<dyn InquirySink>,
    inquiry: Inquiry,
) -> Result<Inquiry, String> {
    tokio::task::spawn_blocking(move || deliver(sink.as_ref(), inquiry))
        .await
        .unwrap_or_else(|err| {
            Err(format!("inquiry delivery task failed: {err}"))
        })
}

/// Hand `inquiry` to `sink`, flattening the error for display.
pub(crate) fn deliver(
    sink: &dyn InquirySink,
    inquiry: Inquiry,
) -> Result<Inquiry, String> {
    match sink.deliver(&inquiry) {
        Ok(()) => Ok(inquiry),
        Err(err) => Err(format!("{err}")),
    }
}
