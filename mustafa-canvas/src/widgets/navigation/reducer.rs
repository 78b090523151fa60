use iced::Task;

use super::event::{NavigationEffect, NavigationEvent, NavigationIntent};
use super::state::NavigationState;

/// Reduce a navigation intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut NavigationState,
    event: NavigationIntent,
) -> Task<NavigationEvent> {
    match event {
        NavigationIntent::ToggleMenu => {
            let open = state.toggle_menu();
            log::debug!("mobile menu toggled: open={open}");
            Task::none()
        },
        NavigationIntent::CloseMenu => {
            if state.is_menu_open() {
                state.close_menu();
                log::debug!("mobile menu closed");
            }
            Task::none()
        },
        NavigationIntent::Navigate(section) => {
            Task::done(NavigationEvent::Effect(NavigationEffect::ScrollTo(
                section,
            )))
        },
        NavigationIntent::NavigateFromMenu(section) => {
            state.toggle_menu();
            Task::done(NavigationEvent::Effect(NavigationEffect::ScrollTo(
                section,
            )))
        },
    }
}

#[cfg(test)]
mod tests {
    use crate::content::SectionId;
    use crate::widgets::navigation::{NavigationIntent, NavigationWidget};

    #[test]
    fn given_new_widget_when_created_then_menu_is_closed() {
        let widget = NavigationWidget::new();
        assert!(!widget.is_menu_open());
    }

    #[test]
    fn given_toggle_intents_when_reduced_then_even_count_restores_initial() {
        let mut widget = NavigationWidget::new();

        for count in 1..=6 {
            let _task = widget.reduce(NavigationIntent::ToggleMenu);
            assert_eq!(widget.is_menu_open(), count % 2 == 1);
        }
        assert!(!widget.is_menu_open());
    }

    #[test]
    fn given_open_menu_when_menu_link_pressed_then_menu_closes() {
        let mut widget = NavigationWidget::new();
        let _open = widget.reduce(NavigationIntent::ToggleMenu);
        assert!(widget.is_menu_open());

        let _task = widget
            .reduce(NavigationIntent::NavigateFromMenu(SectionId::Gallery));

        assert!(!widget.is_menu_open());
    }

    #[test]
    fn given_menu_in_any_state_when_closed_then_menu_is_closed() {
        let mut widget = NavigationWidget::new();

        let _task = widget.reduce(NavigationIntent::CloseMenu);
        assert!(!widget.is_menu_open());

        let _open = widget.reduce(NavigationIntent::ToggleMenu);
        let _task = widget.reduce(NavigationIntent::CloseMenu);
        assert!(!widget.is_menu_open());
    }

    #[test]
    fn given_header_link_when_reduced_then_menu_state_is_untouched() {
        let mut widget = NavigationWidget::new();

        let _task = widget.reduce(NavigationIntent::Navigate(SectionId::About));

        assert!(!widget.is_menu_open());
    }
}
