//! Genre Page
//!
//! `/genre/:name` movie listings for the secondary navigation bar.

use leptos::*;
use leptos_router::use_params_map;
use lukoba::models::genre_id;

use super::listing::{ListingSource, PagedListing};
use crate::app::NotFound;

/// `sci-fi` → `Sci-Fi`
pub fn genre_title(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join("-")
}

#[component]
pub fn Genre() -> impl IntoView {
    let params = use_params_map();
    let slug = create_memo(move |_| params.with(|p| p.get("name").cloned().unwrap_or_default()));

    move || {
        let name = slug.get();
        match genre_id(&name) {
            Some(id) => view! {
                <div class="pt-28 space-y-6">
                    <h1 class="text-2xl font-bold">{genre_title(&name)}</h1>
                    <PagedListing source=Signal::derive(move || ListingSource::Genre(id)) />
                </div>
            }
            .into_view(),
            None => view! { <NotFound /> }.into_view(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_title() {
        assert_eq!(genre_title("action"), "Action");
        assert_eq!(genre_title("sci-fi"), "Sci-Fi");
        assert_eq!(genre_title(""), "");
    }
}
