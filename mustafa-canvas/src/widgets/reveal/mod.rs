mod event;
mod model;
mod reducer;
mod state;

pub(crate) use event::{RevealEffect, RevealEvent, RevealIntent};
use iced::Task;
#[cfg(test)]
pub(crate) use model::RevealPhase;
pub(crate) use model::RevealViewModel;
pub(crate) use reducer::RevealCtx;
use state::RevealState;

#[cfg(test)]
use crate::content::SectionId;

/// Entrance animations for the header and each page section.
pub(crate) struct RevealWidget {
    state: RevealState,
}

impl RevealWidget {
    /// Construct with every element hidden and observation stopped.
    pub(crate) fn new() -> Self {
        Self {
            state: RevealState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: RevealIntent,
        ctx: &RevealCtx<'_>,
    ) -> Task<RevealEvent> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    /// Resolved motion for every animated element.
    pub(crate) fn vm(&self) -> RevealViewModel {
        RevealViewModel::new(self.state.header(), self.state.sections())
    }

    /// Whether any animation still needs frame ticks.
    pub(crate) fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    #[cfg(test)]
    pub(crate) fn phase(&self, section: SectionId) -> RevealPhase {
        self.state.section(section)
    }

    #[cfg(test)]
    pub(crate) fn phase_of_header(&self) -> RevealPhase {
        self.state.header()
    }
}
