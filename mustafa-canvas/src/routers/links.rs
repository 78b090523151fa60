use iced::Task;

use crate::app::AppEvent;

/// Hand an external URI (web, `mailto:`, `tel:`) to the desktop opener.
pub(crate) fn open_link(uri: &'static str) -> Task<AppEvent> {
    match open::that_detached(uri) {
        Ok(()) => log::debug!("opened {uri}"),
        Err(err) => log::warn!("failed to open {uri}: {err}"),
    }
    Task::none()
}
