use super::model::{ContactField, Inquiry};

/// Intent events handled by the contact widget.
#[derive(Debug, Clone)]
pub(crate) enum ContactIntent {
    FieldChanged(ContactField, String),
    Submit,
    /// The sink accepted the inquiry.
    DeliveryCompleted,
    /// The sink rejected the inquiry.
    DeliveryFailed(String),
}

/// Effect events produced by the contact reducer.
#[derive(Debug, Clone)]
pub(crate) enum ContactEffect {
    Delivered(Inquiry),
    DeliveryFailed(String),
}

/// Contact event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum ContactEvent {
    /// Intent event reduced by the contact widget.
    Intent(ContactIntent),
    /// External effect orchestrated by app-level routing.
    Effect(ContactEffect),
}
