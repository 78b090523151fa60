/// Hover state of the gallery grid.
#[derive(Debug, Default)]
pub(super) struct GalleryState {
    hovered: Option<usize>,
}

impl GalleryState {
    pub(super) fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub(super) fn enter(&mut self, index: usize) {
        self.hovered = Some(index);
    }

    /// Clear hover only if `index` still owns it; the pointer may already
    /// have entered a neighbour.
    pub(super) fn exit(&mut self, index: usize) {
        if self.hovered == Some(index) {
            self.hovered = None;
        }
    }
}
