//! Media Card Component
//!
//! Poster tiles linking to the details page.

use leptos::*;
use leptos_router::A;
use lukoba::models::MediaItem;

use crate::state::global::GlobalState;

/// Details route for an item, e.g. `/movie/603`
pub fn details_href(item: &MediaItem, fallback_media_type: &str) -> String {
    format!("/{}/{}", item.media_segment(fallback_media_type), item.id)
}

/// Single poster tile
#[component]
pub fn MediaCard(
    item: MediaItem,
    /// Used when the payload carries no `media_type`
    #[prop(default = "movie")]
    media_type: &'static str,
) -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let href = details_href(&item, media_type);
    let title = item.display_title().to_string();
    let poster = {
        let path = item.poster_path.clone();
        move || state.image(path.as_deref())
    };
    let year = item.release_year();
    let rating = item.rating();

    view! {
        <A href=href class="group block bg-gray-800 rounded-lg overflow-hidden hover:scale-105 transition-transform">
            <div class="aspect-[2/3] bg-gray-700">
                {
                    let title = title.clone();
                    move || poster().map(|src| view! {
                        <img src=src alt=title.clone() class="w-full h-full object-cover" loading="lazy" />
                    })
                }
            </div>
            <div class="p-2">
                <p class="text-sm font-medium text-white truncate">{title}</p>
                <div class="flex items-center justify-between text-xs text-gray-400">
                    <span>{year.map(|y| y.to_string()).unwrap_or_default()}</span>
                    <span>"★ " {rating}</span>
                </div>
            </div>
        </A>
    }
}

/// Responsive grid of poster tiles
#[component]
pub fn MediaGrid(
    #[prop(into)]
    items: Signal<Vec<MediaItem>>,
    #[prop(default = "movie")]
    media_type: &'static str,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-5 gap-4">
            <For
                each=move || items.get()
                key=|item| item.id
                children=move |item| view! { <MediaCard item=item media_type=media_type /> }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(media_type: Option<&str>) -> MediaItem {
        serde_json::from_value(serde_json::json!({
            "id": 603,
            "title": "The Matrix",
            "media_type": media_type,
        }))
        .unwrap()
    }

    #[test]
    fn test_details_href_prefers_payload_media_type() {
        assert_eq!(details_href(&item(Some("tv")), "movie"), "/tv/603");
    }

    #[test]
    fn test_details_href_falls_back() {
        assert_eq!(details_href(&item(None), "movie"), "/movie/603");
    }
}
