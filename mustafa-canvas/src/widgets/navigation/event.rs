use crate::content::SectionId;

/// Intent events handled by the navigation views.
#[derive(Debug, Clone)]
pub(crate) enum NavigationIntent {
    ToggleMenu,
    /// Layout left the mobile breakpoint.
    CloseMenu,
    /// Link in the header, hero or footer.
    Navigate(SectionId),
    /// Link inside the open mobile menu.
    NavigateFromMenu(SectionId),
}

/// Effect events produced by the navigation reducer.
#[derive(Debug, Clone)]
pub(crate) enum NavigationEffect {
    ScrollTo(SectionId),
}

/// Navigation event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum NavigationEvent {
    /// Intent event reduced by the navigation widget.
    Intent(NavigationIntent),
    /// External effect orchestrated by app-level routing.
    Effect(NavigationEffect),
}
