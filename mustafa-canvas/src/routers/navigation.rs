use iced::Task;

use super::page;
use crate::app::{App, AppEvent};
use crate::widgets::navigation::{NavigationEffect, NavigationEvent};

/// Route a navigation event through the widget reducer or to page scroll.
pub(crate) fn route(app: &mut App, event: NavigationEvent) -> Task<AppEvent> {
    match event {
        NavigationEvent::Intent(intent) => app
            .widgets
            .navigation
            .reduce(intent)
            .map(AppEvent::Navigation),
        NavigationEvent::Effect(effect) => route_effect(app, effect),
    }
}

fn route_effect(app: &mut App, effect: NavigationEffect) -> Task<AppEvent> {
    match effect {
        NavigationEffect::ScrollTo(section) => page::scroll_to(app, section),
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use iced::Size;

    use super::route;
    use crate::app::App;
    use crate::config::SiteConfig;
    use crate::content::SectionId;
    use crate::routers::{page, window};
    use crate::widgets::navigation::{
        NavigationEffect, NavigationEvent, NavigationIntent,
    };

    fn mobile_app() -> App {
        let config = SiteConfig::defaults_in(Path::new("/nonexistent"));
        let mut app = App::from_config(&config);
        let _task = window::handle_resize(&mut app, Size::new(375.0, 800.0));
        let _task = page::mount(&mut app);
        app
    }

    fn intent(intent: NavigationIntent) -> NavigationEvent {
        NavigationEvent::Intent(intent)
    }

    #[test]
    fn given_open_mobile_menu_when_entry_pressed_then_menu_hides_and_page_scrolls()
     {
        let mut app = mobile_app();
        let _task = route(&mut app, intent(NavigationIntent::ToggleMenu));
        let vm = app
            .widgets
            .navigation
            .vm(SectionId::Hero, app.state.breakpoint().is_mobile());
        assert!(vm.shows_mobile_menu());

        let _task = route(
            &mut app,
            intent(NavigationIntent::NavigateFromMenu(SectionId::About)),
        );
        let _task = route(
            &mut app,
            NavigationEvent::Effect(NavigationEffect::ScrollTo(
                SectionId::About,
            )),
        );

        let about = app
            .state
            .layout()
            .slot(SectionId::About)
            .expect("about is laid out");
        assert!(!app.widgets.navigation.is_menu_open());
        assert_eq!(app.state.scroll_offset(), about.top);
    }
}
