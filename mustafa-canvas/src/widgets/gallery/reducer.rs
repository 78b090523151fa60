use super::event::GalleryEvent;
use super::state::GalleryState;
use crate::content::GALLERY;

/// Apply a pointer event to the hover state.
pub(crate) fn reduce(state: &mut GalleryState, event: GalleryEvent) {
    match event {
        GalleryEvent::CardEntered(index) if index < GALLERY.len() => {
            state.enter(index);
        },
        GalleryEvent::CardEntered(index) => {
            log::debug!("ignoring hover for unknown gallery card {index}");
        },
        GalleryEvent::CardExited(index) => state.exit(index),
    }
}

#[cfg(test)]
mod tests {
    use crate::widgets::gallery::{GalleryEvent, GalleryWidget};

    #[test]
    fn given_card_entered_when_viewed_then_only_that_card_lifts() {
        let mut widget = GalleryWidget::new();

        widget.reduce(GalleryEvent::CardEntered(2));
        let vm = widget.vm();

        assert_eq!(vm.lift(2), 5.0);
        assert_eq!(vm.lift(0), 0.0);
        assert_eq!(vm.lift(5), 0.0);
    }

    #[test]
    fn given_neighbour_entered_before_exit_when_exit_arrives_then_neighbour_keeps_hover()
     {
        let mut widget = GalleryWidget::new();

        widget.reduce(GalleryEvent::CardEntered(0));
        widget.reduce(GalleryEvent::CardEntered(1));
        widget.reduce(GalleryEvent::CardExited(0));

        assert_eq!(widget.vm().hovered, Some(1));

        widget.reduce(GalleryEvent::CardExited(1));
        assert_eq!(widget.vm().hovered, None);
    }

    #[test]
    fn given_out_of_range_card_when_entered_then_hover_is_unchanged() {
        let mut widget = GalleryWidget::new();

        widget.reduce(GalleryEvent::CardEntered(42));

        assert_eq!(widget.vm().hovered, None);
    }
}
