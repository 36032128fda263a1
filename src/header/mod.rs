//! Header Controller Core
//!
//! State and transitions behind the site header, independent of any UI
//! toolkit:
//!
//! - [`search`]: search field ⇄ address bar synchronisation
//! - [`menu`]: the dismissible profile dropdown
//! - [`press`]: outside-press observation with scoped listener release
//! - [`nav`]: active-aware projection of the navigation links
//!
//! The client-side router is reached through the [`Router`] trait.
//!
//! # Example
//!
//! ```rust
//! use lukoba::header::{Location, Router, SearchSynchronizer};
//! use std::cell::RefCell;
//!
//! struct History(RefCell<Vec<String>>);
//!
//! impl Router for History {
//!     fn location(&self) -> Location {
//!         Location::parse("/search?q=the%20matrix")
//!     }
//!     fn navigate(&self, href: &str) {
//!         self.0.borrow_mut().push(href.to_string());
//!     }
//!     fn is_active(&self, target: &str) -> bool {
//!         target == "/search"
//!     }
//! }
//!
//! let router = History(RefCell::new(Vec::new()));
//! let mut search = SearchSynchronizer::mount(&router);
//! assert_eq!(search.text(), "the matrix");
//!
//! if let Some(request) = search.edit("dune") {
//!     request.dispatch(&router);
//! }
//! assert_eq!(*router.0.borrow(), vec!["/search?q=dune".to_string()]);
//! ```

pub mod location;
pub mod menu;
pub mod nav;
pub mod press;
pub mod router;
pub mod search;

#[cfg(test)]
pub(crate) mod testing;

pub use location::{decode_search_term, search_href, Location, SEARCH_PATH};
pub use menu::{DismissibleMenu, Indicator, MenuAction, MenuItem, MenuState};
pub use nav::{project_links, ActiveLink, NavConfig, NavigationTarget, QuickLink, GENRE_LINKS};
pub use press::{observe_presses, PressBus, PressSource, Region, Subscription};
pub use router::Router;
pub use search::{NavigationRequest, SearchSynchronizer};
