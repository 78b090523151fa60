pub(crate) mod asset_image;
pub(crate) mod icon_button;
pub(crate) mod section_frame;
pub(crate) mod section_heading;
