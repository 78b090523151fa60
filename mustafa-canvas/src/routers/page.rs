use iced::Task;
use iced::widget::operation::snap_to;
use iced::widget::scrollable::RelativeOffset;

use super::{reveal, tracker};
use crate::app::{App, AppEvent, PAGE_SCROLL_ID};
use crate::content::SectionId;
use crate::widgets::reveal::{RevealEvent, RevealIntent};
use crate::widgets::tracker::{TrackerEvent, TrackerIntent};

/// Start section observation once the window is up.
pub(crate) fn mount(app: &mut App) -> Task<AppEvent> {
    observe(app, TrackerIntent::Mount, RevealIntent::Mount)
}

/// Stop section observation.
pub(crate) fn unmount(app: &mut App) -> Task<AppEvent> {
    observe(app, TrackerIntent::Unmount, RevealIntent::Unmount)
}

/// Record a scroll position reported by the page scrollable.
pub(crate) fn handle_scrolled(app: &mut App, offset: f32) -> Task<AppEvent> {
    app.state.set_scroll_offset(offset);
    sync_viewport(app)
}

/// Re-evaluate visibility after the viewport moved.
pub(crate) fn sync_viewport(app: &mut App) -> Task<AppEvent> {
    observe(app, TrackerIntent::ViewportChanged, RevealIntent::ViewportChanged)
}

/// Re-register section bounds after the layout changed.
pub(crate) fn sync_layout(app: &mut App) -> Task<AppEvent> {
    observe(app, TrackerIntent::LayoutChanged, RevealIntent::LayoutChanged)
}

fn observe(
    app: &mut App,
    tracker_intent: TrackerIntent,
    reveal_intent: RevealIntent,
) -> Task<AppEvent> {
    Task::batch([
        tracker::route(app, TrackerEvent::Intent(tracker_intent)),
        reveal::route(app, RevealEvent::Intent(reveal_intent)),
    ])
}

/// Scroll so that `section` starts at the top of the viewport.
///
/// Sections missing from the layout are ignored.
pub(crate) fn scroll_to(app: &mut App, section: SectionId) -> Task<AppEvent> {
    let viewport_height = app.state.viewport_size().height;
    let Some(target) =
        app.state.layout().scroll_target(section, viewport_height)
    else {
        log::debug!("no layout slot for section {}", section.anchor());
        return Task::none();
    };

    app.state.set_scroll_offset(target);
    let relative = app.state.relative_offset(target);
    let observe = sync_viewport(app);

    Task::batch([
        snap_to(
            PAGE_SCROLL_ID,
            RelativeOffset {
                x: 0.0,
                y: relative,
            },
        ),
        observe,
    ])
}
