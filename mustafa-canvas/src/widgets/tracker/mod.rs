mod event;
mod model;
mod reducer;
mod state;

pub(crate) use event::{TrackerEffect, TrackerEvent, TrackerIntent};
use iced::Task;
pub(crate) use model::ActivePolicy;
pub(crate) use reducer::TrackerCtx;
use state::TrackerState;

use crate::content::SectionId;

/// Active-section tracker owning the section visibility observer.
pub(crate) struct TrackerWidget {
    state: TrackerState,
}

impl TrackerWidget {
    /// Construct a stopped tracker with `Hero` active.
    pub(crate) fn new(policy: ActivePolicy, threshold: f32) -> Self {
        Self {
            state: TrackerState::new(policy, threshold),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: TrackerIntent,
        ctx: &TrackerCtx<'_>,
    ) -> Task<TrackerEvent> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    /// The section highlighted in navigation.
    pub(crate) fn active_section(&self) -> SectionId {
        self.state.active()
    }

    /// Whether observation is between mount and unmount.
    #[cfg(test)]
    pub(crate) fn is_running(&self) -> bool {
        self.state.is_running()
    }
}
