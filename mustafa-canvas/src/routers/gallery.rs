use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::gallery::GalleryEvent;

/// Route a gallery pointer event into the widget.
pub(crate) fn route(app: &mut App, event: GalleryEvent) -> Task<AppEvent> {
    app.widgets.gallery.reduce(event);
    Task::none()
}
