#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use std::sync::Arc;

use chrono::Datelike;
use iced::widget::scrollable;
use iced::{Element, Size, Subscription, Task, Theme};

use crate::assets::AssetCatalog;
use crate::config::{self, SiteConfig};
use crate::content;
use crate::shared::ui::theme::SiteTheme;
use crate::state::State;
use crate::widgets::Widgets;
use crate::widgets::contact::{ContactEvent, ContactWidget, OutboxSink};
use crate::widgets::gallery::{GalleryEvent, GalleryWidget};
use crate::widgets::navigation::{NavigationEvent, NavigationWidget};
use crate::widgets::reveal::{RevealEvent, RevealWidget};
use crate::widgets::tracker::{TrackerEvent, TrackerWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 360.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 480.0;
pub(crate) const INITIAL_WINDOW_SIZE: Size = Size {
    width: 1280.0,
    height: 800.0,
};

/// Scrollable holding every page section and the footer.
pub(crate) const PAGE_SCROLL_ID: &str = "page_scroll";

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    IcedReady,
    // Navigation widget
    Navigation(NavigationEvent),
    // Tracker widget
    Tracker(TrackerEvent),
    // Reveal widget
    Reveal(RevealEvent),
    // Gallery widget
    Gallery(GalleryEvent),
    // Contact widget
    Contact(ContactEvent),
    // Direct operations
    OpenLink(&'static str),
    PageScrolled(scrollable::Viewport),
    Window(iced::window::Event),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme: SiteTheme,
    pub(crate) assets: AssetCatalog,
    pub(crate) copyright: String,
    pub(crate) state: State,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let app = Self::from_config(&config::load_initial_config());
        (app, Task::done(()).map(|_: ()| AppEvent::IcedReady))
    }

    /// Build the app around an already loaded configuration.
    pub(crate) fn from_config(config: &SiteConfig) -> Self {
        let assets = AssetCatalog::scan(config.assets_dir());
        let sink = Arc::new(OutboxSink::new(config.outbox_path()));
        log::debug!("inquiry outbox at {}", sink.path().display());

        let widgets = Widgets {
            navigation: NavigationWidget::new(),
            tracker: TrackerWidget::new(
                config.active_section_policy(),
                config.active_threshold(),
            ),
            reveal: RevealWidget::new(),
            gallery: GalleryWidget::new(),
            contact: ContactWidget::new(sink),
        };

        Self {
            theme: SiteTheme::default(),
            assets,
            copyright: content::copyright_line(chrono::Local::now().year()),
            state: State::new(INITIAL_WINDOW_SIZE),
            widgets,
        }
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from(content::BRAND_NAME)
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
