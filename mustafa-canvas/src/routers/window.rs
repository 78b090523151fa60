use iced::{Size, Task, window};

use super::{navigation, page};
use crate::app::{App, AppEvent};
use crate::widgets::navigation::{NavigationEvent, NavigationIntent};

/// Apply a window size and refresh section observation.
pub(crate) fn handle_resize(app: &mut App, size: Size) -> Task<AppEvent> {
    if app.state.set_window_size(size) {
        log::debug!(
            "layout recomputed for {}x{} ({:?})",
            size.width,
            size.height,
            app.state.breakpoint()
        );
        let close_menu = if !app.state.breakpoint().is_mobile()
            && app.widgets.navigation.is_menu_open()
        {
            navigation::route(
                app,
                NavigationEvent::Intent(NavigationIntent::CloseMenu),
            )
        } else {
            Task::none()
        };
        Task::batch([close_menu, page::sync_layout(app)])
    } else {
        page::sync_viewport(app)
    }
}

/// Stop observation before the window goes away.
pub(crate) fn handle_close_requested(app: &mut App) -> Task<AppEvent> {
    log::info!("close requested, stopping section observation");
    let unmount = page::unmount(app);
    Task::batch([unmount, window::latest().and_then(window::close)])
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use iced::Size;

    use super::handle_resize;
    use crate::app::App;
    use crate::config::SiteConfig;
    use crate::routers::navigation;
    use crate::widgets::navigation::{NavigationEvent, NavigationIntent};

    fn mobile_app_with_open_menu() -> App {
        let config = SiteConfig::defaults_in(Path::new("/nonexistent"));
        let mut app = App::from_config(&config);
        let _task = handle_resize(&mut app, Size::new(375.0, 800.0));
        let _task = navigation::route(
            &mut app,
            NavigationEvent::Intent(NavigationIntent::ToggleMenu),
        );
        app
    }

    #[test]
    fn given_open_menu_when_widened_past_mobile_then_menu_stays_closed_after_narrowing()
     {
        let mut app = mobile_app_with_open_menu();
        assert!(app.widgets.navigation.is_menu_open());

        let _task = handle_resize(&mut app, Size::new(1280.0, 800.0));
        assert!(!app.widgets.navigation.is_menu_open());

        let _task = handle_resize(&mut app, Size::new(375.0, 800.0));
        assert!(!app.widgets.navigation.is_menu_open());
    }

    #[test]
    fn given_open_menu_when_resized_within_mobile_then_menu_stays_open() {
        let mut app = mobile_app_with_open_menu();

        let _task = handle_resize(&mut app, Size::new(390.0, 700.0));

        assert!(app.widgets.navigation.is_menu_open());
    }
}
