/// Pointer events emitted by gallery cards.
#[derive(Debug, Clone)]
pub(crate) enum GalleryEvent {
    CardEntered(usize),
    CardExited(usize),
}
