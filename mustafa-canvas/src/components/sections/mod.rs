pub(crate) mod about;
pub(crate) mod contact_details;
pub(crate) mod footer;
pub(crate) mod hero;

use crate::content::SectionId;

/// Link activations emitted by page sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PageLink {
    /// Scroll to an in-page section.
    Section(SectionId),
    /// Hand a URI to the desktop opener.
    External(&'static str),
}
