use chrono::Utc;
use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::contact::{
    ContactCtx, ContactEffect, ContactEvent, ContactIntent,
};

/// Route a contact event through the widget reducer and map effects.
pub(crate) fn route(app: &mut App, event: ContactEvent) -> Task<AppEvent> {
    match event {
        ContactEvent::Intent(intent) => {
            let ctx = ContactCtx { now: Utc::now() };
            app.widgets
                .contact
                .reduce(intent, &ctx)
                .map(AppEvent::Contact)
        },
        ContactEvent::Effect(effect) => route_effect(effect),
    }
}

/// Log delivery outcomes and feed them back to the form.
fn route_effect(effect: ContactEffect) -> Task<AppEvent> {
    let intent = match effect {
        ContactEffect::Delivered(inquiry) => {
            log::info!(
                "inquiry stored: subject={:?} received_at={}",
                inquiry.subject,
                inquiry.received_at.to_rfc3339()
            );
            ContactIntent::DeliveryCompleted
        },
        ContactEffect::DeliveryFailed(message) => {
            log::warn!("inquiry delivery failed: {message}");
            ContactIntent::DeliveryFailed(message)
        },
    };

    Task::done(AppEvent::Contact(ContactEvent::Intent(intent)))
}
