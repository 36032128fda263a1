//! Search Page
//!
//! `/search?q=…` results. The header's search field drives the query.

use leptos::*;
use leptos_router::use_query_map;

use super::listing::{ListingSource, PagedListing};

#[component]
pub fn Search() -> impl IntoView {
    let query = use_query_map();
    let term = create_memo(move |_| {
        query.with(|q| q.get("q").map(|t| t.trim().to_string()).unwrap_or_default())
    });

    view! {
        <div class="pt-28 space-y-6">
            <Show
                when=move || !term.with(String::is_empty)
                fallback=|| view! {
                    <p class="text-center text-gray-400 py-12">"Type in the search box to find movies and shows"</p>
                }
            >
                <h1 class="text-2xl font-bold">"Results for \"" {term} "\""</h1>
                <PagedListing source=Signal::derive(move || ListingSource::Search(term.get())) />
            </Show>
        </div>
    }
}
