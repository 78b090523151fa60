use iced::{Rectangle, Task};

use super::event::{TrackerEffect, TrackerEvent, TrackerIntent};
use super::state::TrackerState;
use crate::content::SectionId;

/// Read-only geometry for tracker reduction.
pub(crate) struct TrackerCtx<'a> {
    /// Section bounds in document order.
    pub(crate) sections: &'a [(SectionId, Rectangle)],
    pub(crate) viewport: Rectangle,
}

/// Reduce a tracker intent into observer updates and effect events.
pub(crate) fn reduce(
    state: &mut TrackerState,
    event: TrackerIntent,
    ctx: &TrackerCtx<'_>,
) -> Task<TrackerEvent> {
    let changed = match event {
        TrackerIntent::Mount => {
            state.start(ctx.sections);
            state.observe(ctx.viewport)
        },
        TrackerIntent::Unmount => {
            state.stop();
            None
        },
        TrackerIntent::LayoutChanged => {
            if !state.is_running() {
                return Task::none();
            }
            state.register(ctx.sections);
            state.observe(ctx.viewport)
        },
        TrackerIntent::ViewportChanged => state.observe(ctx.viewport),
    };

    match changed {
        Some(section) => Task::done(TrackerEvent::Effect(
            TrackerEffect::ActiveSectionChanged(section),
        )),
        None => Task::none(),
    }
}
