mod app;
mod assets;
mod components;
mod config;
mod content;
mod layout;
mod routers;
mod shared;
mod state;
mod widgets;

use env_logger::Env;
use iced::{Size, window};

use crate::app::{App, INITIAL_WINDOW_SIZE, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .antialiasing(true)
        .window(window::Settings {
            size: INITIAL_WINDOW_SIZE,
            min_size: Some(Size {
                width: MIN_WINDOW_WIDTH,
                height: MIN_WINDOW_HEIGHT,
            }),
            exit_on_close_request: false,
            ..window::Settings::default()
        })
        .resizable(true)
        .subscription(App::subscription)
        .run()
}
