//! Home Page
//!
//! Hero banner of this week's trending titles followed by the full grid.

use leptos::*;
use leptos_router::A;
use lukoba::models::MediaItem;

use crate::api;
use crate::components::{details_href, CardSkeleton, MediaGrid};
use crate::state::global::GlobalState;

/// Milliseconds between banner slides
const BANNER_INTERVAL_MS: u32 = 6000;

/// Index of the slide after `current`, wrapping around
pub fn next_slide(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

#[component]
pub fn Home() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    // Fetch trending on mount
    create_effect(move |_| {
        spawn_local(async move {
            state.loading.set(true);
            match api::fetch_trending().await {
                Ok(items) => state.set_banner_data(items),
                Err(e) => state.show_error(&format!("Failed to fetch trending: {}", e)),
            }
            state.loading.set(false);
        });
    });

    let slide = create_rw_signal(0usize);
    let ticker = gloo_timers::callback::Interval::new(BANNER_INTERVAL_MS, move || {
        let len = state.banner_data.with_untracked(Vec::len);
        slide.update(|current| *current = next_slide(*current, len));
    });
    on_cleanup(move || drop(ticker));

    let current = create_memo(move |_| {
        state
            .banner_data
            .with(|items| items.get(slide.get()).cloned())
    });

    view! {
        <div>
            {move || current.get().map(|item| view! { <Banner item=item /> })}

            <section class="container mx-auto px-4 py-8 space-y-4">
                <h2 class="text-xl font-semibold">"Trending This Week"</h2>
                <Show
                    when=move || !state.banner_data.with(Vec::is_empty)
                    fallback=move || state.loading.get().then(|| view! { <CardSkeleton /> })
                >
                    <MediaGrid items=state.banner_data />
                </Show>
            </section>
        </div>
    }
}

#[component]
fn Banner(item: MediaItem) -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let backdrop = item.backdrop_path.clone();
    let href = details_href(&item, "movie");

    view! {
        <div class="relative h-[80vh] w-full overflow-hidden">
            {move || state.image(backdrop.as_deref()).map(|src| view! {
                <img src=src class="w-full h-full object-cover" />
            })}
            <div class="absolute inset-0 bg-gradient-to-t from-gray-900 via-transparent to-transparent" />
            <div class="absolute bottom-16 left-0 container mx-auto px-4 space-y-4 max-w-2xl">
                <h1 class="text-4xl lg:text-5xl font-bold">{item.display_title().to_string()}</h1>
                <p class="text-gray-200 line-clamp-3">{item.overview.clone()}</p>
                <div class="flex items-center space-x-4 text-sm text-gray-300">
                    <span>"★ " {item.rating()}</span>
                    <span>{item.release_year().map(|y| y.to_string()).unwrap_or_default()}</span>
                </div>
                <A href=href class="inline-block px-6 py-2 bg-white text-black font-semibold rounded-md hover:bg-gray-200">
                    "Play Now"
                </A>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_slide_wraps() {
        assert_eq!(next_slide(0, 3), 1);
        assert_eq!(next_slide(2, 3), 0);
        assert_eq!(next_slide(5, 0), 0);
    }
}
