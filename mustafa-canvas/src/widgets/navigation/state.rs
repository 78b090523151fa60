/// Mobile menu visibility.
#[derive(Debug, Default)]
pub(super) struct NavigationState {
    menu_open: bool,
}

impl NavigationState {
    pub(super) fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub(super) fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Flip the menu and return the new value.
    pub(super) fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }
}
