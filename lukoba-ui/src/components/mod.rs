//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod header;
pub mod loading;
pub mod media_card;
pub mod toast;

pub use header::Header;
pub use loading::{CardSkeleton, Loading};
pub use media_card::{details_href, MediaGrid};
pub use toast::Toast;
