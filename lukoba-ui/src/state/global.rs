//! Global Application State
//!
//! Reactive store using Leptos signals. Pages write the hero banner and the
//! image URL prefix; the header never touches it.

use leptos::*;
use lukoba::models::{ApiConfiguration, MediaItem};

/// Image size used for backdrops and posters
pub const IMAGE_SIZE: &str = "original";

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Items rotated through the home page hero banner
    pub banner_data: RwSignal<Vec<MediaItem>>,
    /// Prefix joined with a TMDB image path to get a full URL
    pub image_url: RwSignal<String>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        banner_data: create_rw_signal(Vec::new()),
        image_url: create_rw_signal(String::new()),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    pub fn set_banner_data(&self, items: Vec<MediaItem>) {
        self.banner_data.set(items);
    }

    pub fn set_image_url(&self, url: String) {
        self.image_url.set(url);
    }

    /// Store the image prefix from a `/configuration` response
    pub fn apply_configuration(&self, config: &ApiConfiguration) {
        self.set_image_url(config.images.image_url(IMAGE_SIZE));
    }

    /// Full URL for an image path, if both the prefix and path are known
    pub fn image(&self, path: Option<&str>) -> Option<String> {
        join_image_url(&self.image_url.get(), path)
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        web_sys::console::error_1(&message.into());
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

/// Join an image prefix with a TMDB path like `/abc.jpg`
pub fn join_image_url(prefix: &str, path: Option<&str>) -> Option<String> {
    let path = path.filter(|p| !p.is_empty())?;
    if prefix.is_empty() {
        return None;
    }
    Some(format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        path.trim_start_matches('/')
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_image_url() {
        assert_eq!(
            join_image_url("https://image.tmdb.org/t/p/original", Some("/m.jpg")).as_deref(),
            Some("https://image.tmdb.org/t/p/original/m.jpg")
        );
        assert_eq!(join_image_url("", Some("/m.jpg")), None);
        assert_eq!(join_image_url("https://x/", None), None);
        assert_eq!(join_image_url("https://x/", Some("")), None);
    }
}
