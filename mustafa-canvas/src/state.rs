use iced::{Rectangle, Size};

use crate::layout::{self, Breakpoint, PageLayout};

/// Window geometry, scroll position and the derived page layout.
#[derive(Debug, Clone)]
pub(crate) struct State {
    window_size: Size,
    scroll_offset: f32,
    layout: PageLayout,
}

impl State {
    /// Create state for an initial window size with the page scrolled to top.
    pub(crate) fn new(window_size: Size) -> Self {
        Self {
            window_size,
            scroll_offset: 0.0,
            layout: PageLayout::compute(layout::viewport_size(window_size)),
        }
    }

    pub(crate) fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub(crate) fn breakpoint(&self) -> Breakpoint {
        self.layout.breakpoint()
    }

    #[cfg(test)]
    pub(crate) fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Size of the scrollable area below the fixed header.
    pub(crate) fn viewport_size(&self) -> Size {
        layout::viewport_size(self.window_size)
    }

    /// The visible band of the document in document coordinates.
    pub(crate) fn viewport(&self) -> Rectangle {
        let size = self.viewport_size();
        Rectangle {
            x: 0.0,
            y: self.scroll_offset,
            width: size.width,
            height: size.height,
        }
    }

    /// Apply a window resize. Returns whether the layout changed.
    pub(crate) fn set_window_size(&mut self, size: Size) -> bool {
        self.window_size = size;
        let next = PageLayout::compute(self.viewport_size());
        let changed = next != self.layout;
        self.layout = next;
        self.scroll_offset = self.clamp_offset(self.scroll_offset);
        changed
    }

    /// Record a new absolute scroll offset, clamped to the scrollable range.
    pub(crate) fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = self.clamp_offset(offset);
    }

    /// Relative offset in `[0, 1]` for the current absolute offset.
    pub(crate) fn relative_offset(&self, offset: f32) -> f32 {
        let max = self.layout.max_scroll(self.viewport_size().height);
        if max <= 0.0 {
            0.0
        } else {
            (offset / max).clamp(0.0, 1.0)
        }
    }

    fn clamp_offset(&self, offset: f32) -> f32 {
        let max = self.layout.max_scroll(self.viewport_size().height);
        if offset.is_nan() {
            0.0
        } else {
            offset.clamp(0.0, max)
        }
    }
}

#[cfg(test)]
mod tests {
    use iced::Size;

    use super::State;

    #[test]
    fn given_new_state_when_viewport_then_starts_at_top_below_header() {
        let state = State::new(Size::new(1280.0, 800.0));
        let viewport = state.viewport();

        assert_eq!(viewport.y, 0.0);
        assert_eq!(viewport.height, 732.0);
        assert_eq!(viewport.width, 1280.0);
    }

    #[test]
    fn given_offset_past_end_when_set_then_clamps_to_max_scroll() {
        let mut state = State::new(Size::new(1280.0, 800.0));
        let max = state.layout().max_scroll(state.viewport_size().height);

        state.set_scroll_offset(max + 5_000.0);
        assert_eq!(state.scroll_offset(), max);

        state.set_scroll_offset(-10.0);
        assert_eq!(state.scroll_offset(), 0.0);
    }

    #[test]
    fn given_resize_across_breakpoint_when_applied_then_layout_changes() {
        let mut state = State::new(Size::new(1280.0, 800.0));

        assert!(state.set_window_size(Size::new(375.0, 800.0)));
        assert!(state.breakpoint().is_mobile());
        assert!(!state.set_window_size(Size::new(375.0, 800.0)));
    }

    #[test]
    fn given_offset_when_relative_offset_then_maps_into_unit_range() {
        let state = State::new(Size::new(1280.0, 800.0));
        let max = state.layout().max_scroll(state.viewport_size().height);

        assert_eq!(state.relative_offset(0.0), 0.0);
        assert_eq!(state.relative_offset(max), 1.0);
        assert_eq!(state.relative_offset(max * 4.0), 1.0);
    }
}
