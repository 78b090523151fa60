mod errors;
mod event;
mod model;
mod reducer;
mod sink;
mod state;
pub(crate) mod view;

use std::sync::Arc;

pub(crate) use event::{ContactEffect, ContactEvent, ContactIntent};
use iced::Task;
pub(crate) use model::{ContactField, ContactStatus, ContactViewModel};
pub(crate) use reducer::ContactCtx;
pub(crate) use sink::{InquirySink, OutboxSink};
use state::ContactState;

/// Contact form widget owning the draft and the inquiry sink.
pub(crate) struct ContactWidget {
    state: ContactState,
}

impl ContactWidget {
    /// Construct an empty, idle form delivering to `sink`.
    pub(crate) fn new(sink: Arc<dyn InquirySink>) -> Self {
        Self {
            state: ContactState::new(sink),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: ContactIntent,
        ctx: &ContactCtx,
    ) -> Task<ContactEvent> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    pub(crate) fn vm(&self) -> ContactViewModel<'_> {
        ContactViewModel {
            draft: self.state.draft(),
            status: self.state.status(),
            errors: self.state.errors(),
        }
    }
}
