use iced::Task;

use crate::app::{App, AppEvent};

pub(crate) mod contact;
pub(crate) mod gallery;
pub(crate) mod links;
pub(crate) mod navigation;
pub(crate) mod page;
pub(crate) mod reveal;
pub(crate) mod tracker;
pub(crate) mod window;

pub(crate) fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::IcedReady => page::mount(app),
        // Navigation widget
        AppEvent::Navigation(event) => navigation::route(app, event),
        // Tracker widget
        AppEvent::Tracker(event) => tracker::route(app, event),
        // Reveal widget
        AppEvent::Reveal(event) => reveal::route(app, event),
        // Gallery widget
        AppEvent::Gallery(event) => gallery::route(app, event),
        // Contact widget
        AppEvent::Contact(event) => contact::route(app, event),
        // Direct operations
        AppEvent::OpenLink(uri) => links::open_link(uri),
        AppEvent::PageScrolled(viewport) => {
            page::handle_scrolled(app, viewport.absolute_offset().y)
        },
        AppEvent::Window(iced::window::Event::Opened { size, .. })
        | AppEvent::Window(iced::window::Event::Resized(size)) => {
            window::handle_resize(app, size)
        },
        AppEvent::Window(iced::window::Event::CloseRequested) => {
            window::handle_close_requested(app)
        },
        AppEvent::Window(_) => Task::none(),
    }
}
