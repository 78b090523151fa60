use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::tracker::{
    TrackerCtx, TrackerEffect, TrackerEvent, TrackerIntent,
};

/// Route a tracker event through the widget reducer and map effects.
pub(crate) fn route(app: &mut App, event: TrackerEvent) -> Task<AppEvent> {
    match event {
        TrackerEvent::Intent(intent) => route_intent(app, intent),
        TrackerEvent::Effect(effect) => route_effect(effect),
    }
}

/// Reduce a tracker intent against the current page geometry.
fn route_intent(
    app: &mut App,
    intent: TrackerIntent,
) -> Task<AppEvent> {
    let sections = app.state.layout().section_bounds();
    let ctx = TrackerCtx {
        sections: &sections,
        viewport: app.state.viewport(),
    };
    app.widgets
        .tracker
        .reduce(intent, &ctx)
        .map(AppEvent::Tracker)
}

fn route_effect(effect: TrackerEffect) -> Task<AppEvent> {
    match effect {
        TrackerEffect::ActiveSectionChanged(section) => {
            log::debug!("active section changed: {}", section.anchor());
        },
    }
    Task::none()
}
