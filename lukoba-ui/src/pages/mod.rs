//! Pages
//!
//! Top-level page components for each route.

pub mod details;
pub mod explore;
pub mod genre;
pub mod home;
pub mod listing;
pub mod search;

pub use details::Details;
pub use explore::Explore;
pub use genre::Genre;
pub use home::Home;
pub use search::Search;
