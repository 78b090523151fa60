use iced::{Rectangle, Size};

use crate::content::{GALLERY, SectionId};

pub(crate) const BREAKPOINT_SM: f32 = 640.0;
pub(crate) const BREAKPOINT_MD: f32 = 768.0;
pub(crate) const BREAKPOINT_LG: f32 = 1024.0;

const HEADER_HEIGHT_BASE: f32 = 60.0;
const HEADER_HEIGHT_WIDE: f32 = 68.0;

const HERO_VIEWPORT_SHARE: f32 = 0.8;
const HERO_MIN_HEIGHT_BASE: f32 = 360.0;
const HERO_MIN_HEIGHT_WIDE: f32 = 420.0;

const SECTION_PADDING_Y_BASE: f32 = 64.0;
const SECTION_PADDING_Y_WIDE: f32 = 80.0;
const HEADING_BLOCK_BASE: f32 = 80.0;
const HEADING_BLOCK_WIDE: f32 = 96.0;

const ABOUT_TEXT_HEIGHT: f32 = 280.0;
const ABOUT_STACK_GAP: f32 = 16.0;
const ABOUT_PHOTO_HEIGHT_STACKED: f32 = 320.0;
const ABOUT_PHOTO_HEIGHT_SIDE: f32 = 400.0;

const CARD_TEXT_HEIGHT_BASE: f32 = 88.0;
const CARD_TEXT_HEIGHT_WIDE: f32 = 104.0;

const CONTACT_DETAILS_HEIGHT: f32 = 260.0;
const CONTACT_FORM_HEIGHT: f32 = 470.0;
const CONTACT_GAP: f32 = 40.0;

const FOOTER_HEIGHT_STACKED: f32 = 860.0;
const FOOTER_HEIGHT_SIDE: f32 = 500.0;

/// Responsive width classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Breakpoint {
    Base,
    Sm,
    Md,
    Lg,
}

impl Breakpoint {
    pub(crate) fn from_width(width: f32) -> Self {
        if width >= BREAKPOINT_LG {
            Breakpoint::Lg
        } else if width >= BREAKPOINT_MD {
            Breakpoint::Md
        } else if width >= BREAKPOINT_SM {
            Breakpoint::Sm
        } else {
            Breakpoint::Base
        }
    }

    /// Whether the header collapses navigation behind the menu toggle.
    pub(crate) fn is_mobile(self) -> bool {
        self < Breakpoint::Md
    }

    pub(crate) fn gallery_columns(self) -> usize {
        match self {
            Breakpoint::Base => 1,
            Breakpoint::Sm | Breakpoint::Md => 2,
            Breakpoint::Lg => 3,
        }
    }

    /// Whether the larger type scale and spacing apply.
    pub(crate) fn wide(self) -> bool {
        self >= Breakpoint::Sm
    }
}

/// Height of the fixed header for the given breakpoint.
pub(crate) fn header_height(breakpoint: Breakpoint) -> f32 {
    if breakpoint.wide() {
        HEADER_HEIGHT_WIDE
    } else {
        HEADER_HEIGHT_BASE
    }
}

/// Scroll viewport size for a window of `window_size`.
pub(crate) fn viewport_size(window_size: Size) -> Size {
    let breakpoint = Breakpoint::from_width(window_size.width);
    let height = (window_size.height - header_height(breakpoint)).max(0.0);
    Size::new(window_size.width, height)
}

/// Gallery grid measurements for one breakpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct GalleryMetrics {
    pub(crate) columns: usize,
    pub(crate) rows: usize,
    pub(crate) image_height: f32,
    pub(crate) card_height: f32,
    pub(crate) gap: f32,
}

impl GalleryMetrics {
    pub(crate) fn for_breakpoint(breakpoint: Breakpoint) -> Self {
        let columns = breakpoint.gallery_columns();
        let rows = GALLERY.len().div_ceil(columns);
        let image_height = match breakpoint {
            Breakpoint::Base => 192.0,
            Breakpoint::Sm => 224.0,
            Breakpoint::Md | Breakpoint::Lg => 256.0,
        };
        let text_height = if breakpoint.wide() {
            CARD_TEXT_HEIGHT_WIDE
        } else {
            CARD_TEXT_HEIGHT_BASE
        };
        let gap = match breakpoint {
            Breakpoint::Base => 16.0,
            Breakpoint::Sm | Breakpoint::Md => 24.0,
            Breakpoint::Lg => 32.0,
        };

        Self {
            columns,
            rows,
            image_height,
            card_height: image_height + text_height,
            gap,
        }
    }

    fn grid_height(&self) -> f32 {
        let rows = self.rows as f32;
        rows * self.card_height + (rows - 1.0).max(0.0) * self.gap
    }
}

/// Fixed block heights the section views are drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SectionMetrics {
    pub(crate) padding_y: f32,
    pub(crate) heading_height: f32,
    pub(crate) hero_min_height: f32,
    /// About text and photo stack vertically instead of side by side.
    pub(crate) about_stacked: bool,
    pub(crate) about_text_height: f32,
    pub(crate) about_stack_gap: f32,
    pub(crate) about_photo_height: f32,
    pub(crate) contact_details_height: f32,
    pub(crate) contact_gap: f32,
    pub(crate) contact_form_height: f32,
}

impl SectionMetrics {
    pub(crate) fn for_breakpoint(breakpoint: Breakpoint) -> Self {
        let wide = breakpoint.wide();
        let about_stacked = breakpoint.is_mobile();

        Self {
            padding_y: if wide {
                SECTION_PADDING_Y_WIDE
            } else {
                SECTION_PADDING_Y_BASE
            },
            heading_height: if wide {
                HEADING_BLOCK_WIDE
            } else {
                HEADING_BLOCK_BASE
            },
            hero_min_height: if wide {
                HERO_MIN_HEIGHT_WIDE
            } else {
                HERO_MIN_HEIGHT_BASE
            },
            about_stacked,
            about_text_height: ABOUT_TEXT_HEIGHT,
            about_stack_gap: ABOUT_STACK_GAP,
            about_photo_height: if about_stacked {
                ABOUT_PHOTO_HEIGHT_STACKED
            } else {
                ABOUT_PHOTO_HEIGHT_SIDE
            },
            contact_details_height: CONTACT_DETAILS_HEIGHT,
            contact_gap: CONTACT_GAP,
            contact_form_height: CONTACT_FORM_HEIGHT,
        }
    }

    pub(crate) fn about_body_height(&self) -> f32 {
        if self.about_stacked {
            self.about_text_height
                + self.about_stack_gap
                + self.about_photo_height
        } else {
            self.about_photo_height
        }
    }
}

/// Vertical slot occupied by one section in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SectionSlot {
    pub(crate) id: SectionId,
    pub(crate) top: f32,
    pub(crate) height: f32,
}

impl SectionSlot {
    pub(crate) fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub(crate) fn bounds(&self, width: f32) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: self.top,
            width,
            height: self.height,
        }
    }
}

/// Deterministic document geometry shared by the view and the trackers.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PageLayout {
    breakpoint: Breakpoint,
    width: f32,
    slots: Vec<SectionSlot>,
    footer_height: f32,
    sections: SectionMetrics,
    gallery: GalleryMetrics,
}

impl PageLayout {
    /// Lay out the document for a scroll viewport of `viewport` size.
    pub(crate) fn compute(viewport: Size) -> Self {
        let breakpoint = Breakpoint::from_width(viewport.width);
        let gallery = GalleryMetrics::for_breakpoint(breakpoint);
        let sections = SectionMetrics::for_breakpoint(breakpoint);

        let mut top = 0.0;
        let slots = SectionId::ALL
            .into_iter()
            .map(|id| {
                let height =
                    section_height(id, viewport, &sections, &gallery);
                let slot = SectionSlot { id, top, height };
                top += height;
                slot
            })
            .collect();

        let footer_height = if breakpoint.is_mobile() {
            FOOTER_HEIGHT_STACKED
        } else {
            FOOTER_HEIGHT_SIDE
        };

        Self {
            breakpoint,
            width: viewport.width,
            slots,
            footer_height,
            sections,
            gallery,
        }
    }

    pub(crate) fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    pub(crate) fn gallery(&self) -> GalleryMetrics {
        self.gallery
    }

    pub(crate) fn sections(&self) -> SectionMetrics {
        self.sections
    }

    #[cfg(test)]
    pub(crate) fn slots(&self) -> &[SectionSlot] {
        &self.slots
    }

    pub(crate) fn slot(&self, id: SectionId) -> Option<SectionSlot> {
        self.slots.iter().copied().find(|slot| slot.id == id)
    }

    /// Height of a section, or `0.0` when it is not laid out.
    pub(crate) fn section_height(&self, id: SectionId) -> f32 {
        self.slot(id).map(|slot| slot.height).unwrap_or(0.0)
    }

    pub(crate) fn footer_height(&self) -> f32 {
        self.footer_height
    }

    /// Total scrollable content height.
    pub(crate) fn content_height(&self) -> f32 {
        let bottom = self.slots.last().map(SectionSlot::bottom);
        bottom.unwrap_or(0.0) + self.footer_height
    }

    /// Largest scroll offset for a viewport of `viewport_height`.
    pub(crate) fn max_scroll(&self, viewport_height: f32) -> f32 {
        (self.content_height() - viewport_height).max(0.0)
    }

    /// Scroll offset that brings `id` to the top of the viewport.
    pub(crate) fn scroll_target(
        &self,
        id: SectionId,
        viewport_height: f32,
    ) -> Option<f32> {
        self.slot(id)
            .map(|slot| slot.top.clamp(0.0, self.max_scroll(viewport_height)))
    }

    /// Section bounds in document order.
    pub(crate) fn section_bounds(&self) -> Vec<(SectionId, Rectangle)> {
        self.slots
            .iter()
            .map(|slot| (slot.id, slot.bounds(self.width)))
            .collect()
    }
}

fn section_height(
    id: SectionId,
    viewport: Size,
    metrics: &SectionMetrics,
    gallery: &GalleryMetrics,
) -> f32 {
    let frame = metrics.padding_y * 2.0 + metrics.heading_height;

    match id {
        SectionId::Hero => {
            (viewport.height * HERO_VIEWPORT_SHARE).max(metrics.hero_min_height)
        },
        SectionId::About => frame + metrics.about_body_height(),
        SectionId::Gallery => frame + gallery.grid_height(),
        SectionId::Contact => {
            frame
                + metrics.contact_details_height
                + metrics.contact_gap
                + metrics.contact_form_height
        },
    }
}
