//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Poster-shaped placeholders shown while a listing loads
#[component]
pub fn CardSkeleton(
    #[prop(default = 10)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-5 gap-4 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-gray-800 rounded-lg aspect-[2/3]" />
            }).collect_view()}
        </div>
    }
}
