mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::GalleryEvent;
pub(crate) use model::GalleryViewModel;
use state::GalleryState;

/// Gallery grid widget tracking the hovered card.
pub(crate) struct GalleryWidget {
    state: GalleryState,
}

impl GalleryWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: GalleryState::default(),
        }
    }

    /// Reduce a pointer event into hover state.
    pub(crate) fn reduce(&mut self, event: GalleryEvent) {
        reducer::reduce(&mut self.state, event);
    }

    pub(crate) fn vm(&self) -> GalleryViewModel {
        GalleryViewModel {
            hovered: self.state.hovered(),
        }
    }
}
