pub(crate) mod contact;
pub(crate) mod gallery;
pub(crate) mod navigation;
pub(crate) mod reveal;
pub(crate) mod tracker;

pub(crate) struct Widgets {
    pub(crate) navigation: navigation::NavigationWidget,
    pub(crate) tracker: tracker::TrackerWidget,
    pub(crate) reveal: reveal::RevealWidget,
    pub(crate) gallery: gallery::GalleryWidget,
    pub(crate) contact: contact::ContactWidget,
}
