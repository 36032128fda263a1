//! Test doubles for the header collaborators

use std::cell::RefCell;

use super::location::Location;
use super::router::Router;

/// Router that records every navigation and follows it.
///
/// Links are active when every path segment they share with the current
/// location is equal, which is how the browser app's router marks links.
#[derive(Debug, Default)]
pub struct RecordingRouter {
    location: RefCell<Location>,
    navigations: RefCell<Vec<String>>,
    queries: RefCell<Vec<String>>,
}

impl RecordingRouter {
    pub fn at(href: &str) -> Self {
        Self {
            location: RefCell::new(Location::parse(href)),
            ..Self::default()
        }
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }

    /// Targets `is_active` was asked about, in order
    pub fn active_queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }

    /// Move without recording, as if the user followed a link
    pub fn visit(&self, href: &str) {
        *self.location.borrow_mut() = Location::parse(href);
    }
}

impl Router for RecordingRouter {
    fn location(&self) -> Location {
        self.location.borrow().clone()
    }

    fn navigate(&self, href: &str) {
        self.navigations.borrow_mut().push(href.to_string());
        *self.location.borrow_mut() = Location::parse(href);
    }

    fn is_active(&self, target: &str) -> bool {
        self.queries.borrow_mut().push(target.to_string());
        let current = self.location.borrow();
        current
            .path
            .split('/')
            .zip(target.split('/'))
            .all(|(c, t)| c == t)
    }
}
