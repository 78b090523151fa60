use std::time::Instant;

use iced::{Rectangle, Task};

use super::event::{RevealEffect, RevealEvent, RevealIntent};
use super::state::RevealState;
use crate::content::SectionId;

/// Read-only geometry and clock for reveal reduction.
pub(crate) struct RevealCtx<'a> {
    /// Section bounds in document order.
    pub(crate) sections: &'a [(SectionId, Rectangle)],
    pub(crate) viewport: Rectangle,
    pub(crate) now: Instant,
}

/// Reduce a reveal intent into phase updates and effect events.
pub(crate) fn reduce(
    state: &mut RevealState,
    event: RevealIntent,
    ctx: &RevealCtx<'_>,
) -> Task<RevealEvent> {
    let revealed = match event {
        RevealIntent::Mount => {
            state.start(ctx.sections, ctx.now);
            state.observe(ctx.viewport, ctx.now)
        },
        RevealIntent::Unmount => {
            state.stop();
            Vec::new()
        },
        RevealIntent::LayoutChanged => {
            if !state.is_running() {
                return Task::none();
            }
            state.register(ctx.sections);
            state.observe(ctx.viewport, ctx.now)
        },
        RevealIntent::ViewportChanged => state.observe(ctx.viewport, ctx.now),
        RevealIntent::Tick => {
            state.tick(ctx.now);
            Vec::new()
        },
    };

    Task::batch(revealed.into_iter().map(|section| {
        Task::done(RevealEvent::Effect(RevealEffect::SectionRevealed(section)))
    }))
}
