//! Search Synchronizer
//!
//! Keeps the header's search field, the address bar and navigation in
//! agreement. The field is seeded once from the location at mount; after
//! that every change to a non-empty value yields exactly one navigation to
//! the results page.

use super::location::{search_href, Location};
use super::router::Router;

/// Navigation the header wants the router to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub href: String,
}

impl NavigationRequest {
    /// Hand the request to the router
    pub fn dispatch(self, router: &impl Router) {
        tracing::debug!(href = %self.href, "Header navigation");
        router.navigate(&self.href);
    }
}

/// Search field state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSynchronizer {
    text: String,
    focused: bool,
}

impl SearchSynchronizer {
    /// Seed the field from a location's query component
    pub fn from_location(location: &Location) -> Self {
        Self {
            text: location.search_term(),
            focused: false,
        }
    }

    /// Seed the field from wherever the router currently is.
    ///
    /// Mounting never navigates, even when the seeded text is non-empty.
    /// A render effect keyed on the text would also fire here and send
    /// every page load with a query (say `/movie/1?q=x`) to the results
    /// page; only edits navigate.
    pub fn mount(router: &impl Router) -> Self {
        let sync = Self::from_location(&router.location());
        tracing::trace!(text = %sync.text, "Search field seeded");
        sync
    }

    /// Replace the text with the full contents of the input.
    ///
    /// Returns the navigation to issue for this change, if any: none when
    /// the text is unchanged or became empty.
    pub fn edit(&mut self, text: impl Into<String>) -> Option<NavigationRequest> {
        let text = text.into();
        if text == self.text {
            return None;
        }
        self.text = text;

        if self.text.is_empty() {
            tracing::trace!("Search field cleared, results left in place");
            return None;
        }

        Some(NavigationRequest {
            href: search_href(&self.text),
        })
    }

    /// Explicit form submission. Navigation already happened on edit, so
    /// the caller only has to suppress the page reload.
    pub fn submit(&self) {
        tracing::trace!(text = %self.text, "Search submitted");
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::testing::RecordingRouter;

    fn type_text(sync: &mut SearchSynchronizer, router: &RecordingRouter, text: &str) {
        if let Some(request) = sync.edit(text) {
            request.dispatch(router);
        }
    }

    #[test]
    fn test_mount_decodes_query() {
        let router = RecordingRouter::at("/search?q=the%20matrix");
        let sync = SearchSynchronizer::mount(&router);

        assert_eq!(sync.text(), "the matrix");
        assert!(router.navigations().is_empty());
    }

    #[test]
    fn test_mount_elsewhere_with_query_stays_put() {
        let router = RecordingRouter::at("/movie/1?q=x");
        let sync = SearchSynchronizer::mount(&router);

        assert_eq!(sync.text(), "x");
        assert!(router.navigations().is_empty());
        assert_eq!(router.location().path, "/movie/1");
    }

    #[test]
    fn test_mount_without_query_is_empty() {
        let router = RecordingRouter::at("/movie");
        let sync = SearchSynchronizer::mount(&router);
        assert_eq!(sync.text(), "");
    }

    #[test]
    fn test_single_edit_navigates_once() {
        let router = RecordingRouter::at("/");
        let mut sync = SearchSynchronizer::mount(&router);

        type_text(&mut sync, &router, "dune");

        assert_eq!(router.navigations(), vec!["/search?q=dune"]);
        assert_eq!(router.location().path, "/search");
    }

    #[test]
    fn test_every_keystroke_navigates() {
        let router = RecordingRouter::at("/");
        let mut sync = SearchSynchronizer::mount(&router);

        for text in ["d", "du", "dun", "dune"] {
            type_text(&mut sync, &router, text);
        }

        assert_eq!(
            router.navigations(),
            vec![
                "/search?q=d",
                "/search?q=du",
                "/search?q=dun",
                "/search?q=dune",
            ]
        );
    }

    #[test]
    fn test_empty_text_does_not_navigate() {
        let router = RecordingRouter::at("/search?q=dune");
        let mut sync = SearchSynchronizer::mount(&router);

        assert_eq!(sync.edit(""), None);
        assert_eq!(sync.text(), "");
        assert!(router.navigations().is_empty());
        // Stale results stay where they are.
        assert_eq!(router.location().query, "?q=dune");
    }

    #[test]
    fn test_unchanged_text_is_not_a_change() {
        let router = RecordingRouter::at("/search?q=dune");
        let mut sync = SearchSynchronizer::mount(&router);

        assert_eq!(sync.edit("dune"), None);
        assert!(sync.edit("dunes").is_some());
    }

    #[test]
    fn test_spaces_are_sent_raw() {
        let mut sync = SearchSynchronizer::default();
        let request = sync.edit("the matrix").unwrap();
        assert_eq!(request.href, "/search?q=the matrix");
    }

    #[test]
    fn test_submit_does_not_navigate() {
        let router = RecordingRouter::at("/");
        let mut sync = SearchSynchronizer::mount(&router);
        type_text(&mut sync, &router, "alien");

        sync.submit();

        assert_eq!(router.navigations().len(), 1);
    }

    #[test]
    fn test_focus_tracking() {
        let mut sync = SearchSynchronizer::default();
        assert!(!sync.is_focused());
        sync.focus();
        assert!(sync.is_focused());
        sync.blur();
        assert!(!sync.is_focused());
    }
}
