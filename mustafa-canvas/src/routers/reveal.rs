use std::time::Instant;

use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::reveal::{
    RevealCtx, RevealEffect, RevealEvent, RevealIntent,
};

/// Route a reveal event through the widget reducer and map effects.
pub(crate) fn route(app: &mut App, event: RevealEvent) -> Task<AppEvent> {
    match event {
        RevealEvent::Intent(intent) => route_intent(app, intent),
        RevealEvent::Effect(effect) => route_effect(effect),
    }
}

/// Reduce a reveal intent against the current geometry and clock.
fn route_intent(
    app: &mut App,
    intent: RevealIntent,
) -> Task<AppEvent> {
    let sections = app.state.layout().section_bounds();
    let ctx = RevealCtx {
        sections: &sections,
        viewport: app.state.viewport(),
        now: Instant::now(),
    };
    app.widgets.reveal.reduce(intent, &ctx).map(AppEvent::Reveal)
}

fn route_effect(effect: RevealEffect) -> Task<AppEvent> {
    match effect {
        RevealEffect::SectionRevealed(section) => {
            log::debug!("section revealed: {}", section.anchor());
        },
    }
    Task::none()
}
