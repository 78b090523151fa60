use serde::{Deserialize, Serialize};

/// How the tracker resolves several intersecting sections.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ActivePolicy {
    /// Apply every intersecting entry of a batch in document order.
    #[default]
    LastWriteWins,
    /// Pick the intersecting section whose center is nearest the viewport
    /// center; ties go to the earlier section.
    NearestToCenter,
}
