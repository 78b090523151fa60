use crate::content::SectionId;

/// Intent events handled by the reveal widget.
#[derive(Debug, Clone)]
pub(crate) enum RevealIntent {
    /// Start the header entrance and watch sections for first visibility.
    Mount,
    Unmount,
    LayoutChanged,
    ViewportChanged,
    /// Advance running animations.
    Tick,
}

/// Effect events produced by the reveal reducer.
#[derive(Debug, Clone)]
pub(crate) enum RevealEffect {
    SectionRevealed(SectionId),
}

/// Reveal event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum RevealEvent {
    /// Intent event reduced by the reveal widget.
    Intent(RevealIntent),
    /// External effect orchestrated by app-level routing.
    Effect(RevealEffect),
}
