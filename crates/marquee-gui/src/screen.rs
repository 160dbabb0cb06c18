pub mod details;
pub mod results;
pub mod search;
pub mod watched;

use marquee_core::session::DetailsRequest;

/// Actions that a screen can request from the app.
///
/// Screens return these from `update()` instead of spawning work
/// themselves. The app owns the HTTP client and interprets them in one
/// place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No side-effect.
    None,
    /// The search bar submitted its draft as the new query.
    SubmitQuery(String),
    /// Run this details lookup.
    FetchDetails(DetailsRequest),
    /// Update the status bar message.
    SetStatus(String),
}
