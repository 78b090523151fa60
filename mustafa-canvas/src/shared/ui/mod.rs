pub(crate) mod icons;
pub(crate) mod motion;
pub(crate) mod style;
pub(crate) mod theme;
