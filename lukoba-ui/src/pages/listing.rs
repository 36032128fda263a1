//! Paged Listing
//!
//! Poster grid that pages through a TMDB listing with a "Load more" button.

use leptos::*;
use lukoba::models::{ExploreKind, MediaItem, Page};

use crate::api;
use crate::components::{CardSkeleton, MediaGrid};
use crate::state::global::GlobalState;

/// Where a listing's pages come from
#[derive(Debug, Clone, PartialEq)]
pub enum ListingSource {
    Explore(ExploreKind),
    Genre(u32),
    Search(String),
}

impl ListingSource {
    pub async fn fetch(&self, page: u32) -> Result<Page<MediaItem>, String> {
        match self {
            Self::Explore(kind) => api::fetch_explore(*kind, page).await,
            Self::Genre(id) => api::fetch_genre(*id, page).await,
            Self::Search(query) => api::search(query, page).await,
        }
    }

    /// Media type assumed for items that do not carry one
    pub fn media_type(&self) -> &'static str {
        match self {
            Self::Explore(kind) => kind.media_type(),
            Self::Genre(_) | Self::Search(_) => "movie",
        }
    }
}

#[component]
pub fn PagedListing(
    #[prop(into)]
    source: Signal<ListingSource>,
) -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let items = create_rw_signal(Vec::<MediaItem>::new());
    let page = create_rw_signal(0u32);
    let has_more = create_rw_signal(false);
    let loading = create_rw_signal(false);

    let load = move |from: ListingSource, next: u32| {
        loading.set(true);
        spawn_local(async move {
            let result = from.fetch(next).await;

            // The source changed while this page was in flight
            if source.get_untracked() != from {
                return;
            }

            match result {
                Ok(fetched) => {
                    has_more.set(fetched.has_more());
                    page.set(fetched.page);
                    if next == 1 {
                        items.set(fetched.results);
                    } else {
                        items.update(|all| all.extend(fetched.results));
                    }
                }
                Err(e) => state.show_error(&format!("Failed to load listing: {}", e)),
            }
            loading.set(false);
        });
    };

    // Start over whenever the source changes
    create_effect(move |_| {
        let from = source.get();
        items.set(Vec::new());
        has_more.set(false);
        load(from, 1);
    });

    let load_more = move |_| load(source.get_untracked(), page.get_untracked() + 1);

    view! {
        <div class="space-y-6">
            {move || {
                let media_type = source.with(ListingSource::media_type);
                view! { <MediaGrid items=items media_type=media_type /> }
            }}

            <Show when=move || loading.get() && items.with(Vec::is_empty)>
                <CardSkeleton />
            </Show>

            <Show when=move || !loading.get() && items.with(Vec::is_empty)>
                <p class="text-center text-gray-400 py-12">"Nothing to show"</p>
            </Show>

            <Show when=move || has_more.get()>
                <div class="flex justify-center">
                    <button
                        class="px-6 py-2 bg-red-600 hover:bg-red-700 rounded-md font-medium transition-colors disabled:opacity-50"
                        disabled=move || loading.get()
                        on:click=load_more
                    >
                        "Load more"
                    </button>
                </div>
            </Show>
        </div>
    }
}
