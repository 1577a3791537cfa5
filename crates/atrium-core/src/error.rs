use thiserror::Error;

/// Caller-visible precondition failures. Absent or hidden screens and
/// controls inside the dispatch path are handled by `Option`
/// short-circuiting, never through this type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuiError {
    /// Focus was requested for a control that is not attached to any tree.
    #[error("control is not attached to any tree")]
    StaleControl,

    /// A screen id did not resolve to a live screen.
    #[error("no screen with id {0}")]
    UnknownScreen(u64),
}
