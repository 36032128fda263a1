//! Explore Page
//!
//! `/:explore` listings: TV shows, movies, new releases and trending.

use leptos::*;
use leptos_router::use_params_map;
use lukoba::models::ExploreKind;

use super::listing::{ListingSource, PagedListing};
use crate::app::NotFound;

#[component]
pub fn Explore() -> impl IntoView {
    let params = use_params_map();
    let kind = create_memo(move |_| {
        params.with(|p| p.get("explore").and_then(|segment| ExploreKind::from_segment(segment)))
    });

    move || match kind.get() {
        Some(kind) => view! {
            <div class="pt-28 space-y-6">
                <h1 class="text-2xl font-bold">{kind.title()}</h1>
                <PagedListing source=Signal::derive(move || ListingSource::Explore(kind)) />
            </div>
        }
        .into_view(),
        None => view! { <NotFound /> }.into_view(),
    }
}
