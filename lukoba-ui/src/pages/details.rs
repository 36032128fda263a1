//! Details Page
//!
//! `/:explore/:id` for a single movie or TV show.

use leptos::*;
use leptos_router::use_params_map;
use lukoba::models::MediaDetails;

use crate::api;
use crate::components::Loading;
use crate::state::global::GlobalState;

/// Only movies and shows have a details endpoint
pub fn details_request(media_type: &str, id: &str) -> Option<(String, u64)> {
    if !matches!(media_type, "movie" | "tv") {
        return None;
    }
    let id = id.parse().ok()?;
    Some((media_type.to_string(), id))
}

#[component]
pub fn Details() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let params = use_params_map();

    let request = create_memo(move |_| {
        params.with(|p| {
            let media_type = p.get("explore").map(String::as_str).unwrap_or_default();
            let id = p.get("id").map(String::as_str).unwrap_or_default();
            details_request(media_type, id)
        })
    });

    let details = create_local_resource(
        move || request.get(),
        move |request| async move {
            let (media_type, id) = request?;
            match api::fetch_details(&media_type, id).await {
                Ok(details) => Some(details),
                Err(e) => {
                    state.show_error(&format!("Failed to load details: {}", e));
                    None
                }
            }
        },
    );

    view! {
        <Suspense fallback=|| view! { <div class="pt-28"><Loading /></div> }>
            {move || details.get().map(|found| match found {
                Some(details) => view! { <DetailsView details=details /> }.into_view(),
                None => view! {
                    <p class="pt-28 text-center text-gray-400">"This title could not be found"</p>
                }
                .into_view(),
            })}
        </Suspense>
    }
}

#[component]
fn DetailsView(details: MediaDetails) -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let backdrop = details.item.backdrop_path.clone();
    let poster = details.item.poster_path.clone();
    let facts: Vec<String> = [
        details.item.release_year().map(|y| y.to_string()),
        details.duration(),
        Some(format!("★ {}", details.item.rating())),
        details.status.clone(),
    ]
    .into_iter()
    .flatten()
    .collect();

    view! {
        <div>
            <div class="relative h-[60vh] w-full">
                {move || state.image(backdrop.as_deref()).map(|src| view! {
                    <img src=src class="w-full h-full object-cover" />
                })}
                <div class="absolute inset-0 bg-gradient-to-t from-gray-900 to-transparent" />
            </div>

            <div class="container mx-auto px-4 -mt-40 relative flex flex-col lg:flex-row gap-8">
                <div class="w-60 shrink-0 rounded-lg overflow-hidden bg-gray-800">
                    {move || state.image(poster.as_deref()).map(|src| view! {
                        <img src=src class="w-full object-cover" />
                    })}
                </div>

                <div class="space-y-4">
                    <h1 class="text-4xl font-bold">{details.item.display_title().to_string()}</h1>
                    {details.tagline.clone().filter(|t| !t.is_empty()).map(|tagline| view! {
                        <p class="text-gray-400 italic">{tagline}</p>
                    })}
                    <p class="text-sm text-gray-300">{facts.join(" • ")}</p>
                    <div class="flex flex-wrap gap-2">
                        {details.genres.iter().map(|genre| view! {
                            <span class="px-3 py-1 text-xs bg-gray-800 rounded-full">{genre.name.clone()}</span>
                        }).collect_view()}
                    </div>
                    <p class="text-gray-200 leading-relaxed max-w-3xl">{details.item.overview.clone()}</p>
                </div>
            </div>
        </div>
    }
}
