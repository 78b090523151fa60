/// Distance a hovered card rises, in pixels.
pub(crate) const HOVER_LIFT: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GalleryViewModel {
    pub(crate) hovered: Option<usize>,
}

impl GalleryViewModel {
    pub(crate) fn is_hovered(&self, index: usize) -> bool {
        self.hovered == Some(index)
    }

    pub(crate) fn lift(&self, index: usize) -> f32 {
        if self.is_hovered(index) {
            HOVER_LIFT
        } else {
            0.0
        }
    }
}
