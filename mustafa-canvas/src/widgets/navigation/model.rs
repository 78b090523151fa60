use crate::content::SectionId;

/// Read-only data for the header and mobile menu views.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavigationViewModel {
    pub(crate) menu_open: bool,
    pub(crate) active_section: SectionId,
    pub(crate) is_mobile: bool,
}

impl NavigationViewModel {
    /// The overlay is drawn only for an open menu on narrow layouts.
    pub(crate) fn shows_mobile_menu(&self) -> bool {
        self.menu_open && self.is_mobile
    }
}
