use crate::content::SectionId;

/// Intent events handled by the active-section tracker.
#[derive(Debug, Clone)]
pub(crate) enum TrackerIntent {
    /// Register every section and run the first observation pass.
    Mount,
    /// Release every target.
    Unmount,
    /// Section bounds moved after a resize.
    LayoutChanged,
    /// The scroll viewport moved.
    ViewportChanged,
}

/// Effect events produced by the tracker reducer.
#[derive(Debug, Clone)]
pub(crate) enum TrackerEffect {
    ActiveSectionChanged(SectionId),
}

/// Tracker event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum TrackerEvent {
    /// Intent event reduced by the tracker widget.
    Intent(TrackerIntent),
    /// External effect orchestrated by app-level routing.
    Effect(TrackerEffect),
}
