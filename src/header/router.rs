//! Router collaborator
//!
//! The header never owns the address. It reads it and asks for navigation
//! through this trait; the browser app implements it over its client-side
//! router and tests implement it with a recording fake.

use super::location::Location;

/// Client-side router as seen by the header
pub trait Router {
    /// Current location (path + query)
    fn location(&self) -> Location;

    /// Request navigation to `href`
    fn navigate(&self, href: &str);

    /// Whether a link to `target` is active for the current location.
    ///
    /// Answered by the router's own link-matching rule, the same one its
    /// link component uses to mark the current page.
    fn is_active(&self, target: &str) -> bool;
}
