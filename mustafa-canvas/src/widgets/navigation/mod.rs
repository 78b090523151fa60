mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{NavigationEffect, NavigationEvent, NavigationIntent};
use iced::Task;
pub(crate) use model::NavigationViewModel;
use state::NavigationState;

use crate::content::SectionId;

/// Navigation widget owning the mobile menu state.
pub(crate) struct NavigationWidget {
    state: NavigationState,
}

impl NavigationWidget {
    /// Construct navigation with the menu closed.
    pub(crate) fn new() -> Self {
        Self {
            state: NavigationState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: NavigationIntent,
    ) -> Task<NavigationEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Build a read-only view model for the header and mobile menu.
    pub(crate) fn vm(
        &self,
        active_section: SectionId,
        is_mobile: bool,
    ) -> NavigationViewModel {
        NavigationViewModel {
            menu_open: self.state.is_menu_open(),
            active_section,
            is_mobile,
        }
    }

    pub(crate) fn is_menu_open(&self) -> bool {
        self.state.is_menu_open()
    }
}
