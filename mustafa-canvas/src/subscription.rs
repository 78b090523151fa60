use std::time::Duration;

use iced::{Subscription, window};

use crate::app::{App, AppEvent};
use crate::widgets::reveal::{RevealEvent, RevealIntent};

const ANIMATION_TICK_MS: u64 = 16;

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));

    let mut subs = vec![win_subs];

    // Frame ticks only while an entrance animation is running.
    if app.widgets.reveal.is_animating() {
        let tick = iced::time::every(Duration::from_millis(ANIMATION_TICK_MS))
            .map(|_| AppEvent::Reveal(RevealEvent::Intent(RevealIntent::Tick)));
        subs.push(tick);
    }

    Subscription::batch(subs)
}
