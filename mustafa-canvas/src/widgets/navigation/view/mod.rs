pub(crate) mod header;
pub(crate) mod mobile_menu;
