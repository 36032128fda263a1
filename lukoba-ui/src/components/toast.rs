//! Toast Notification Component
//!
//! Shows failed requests reported through the global state.

use leptos::*;

use crate::state::global::GlobalState;

/// Error toast, dismissed on click or after a timeout
#[component]
pub fn Toast() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <div class="fixed bottom-6 right-4 z-50 space-y-2">
            {move || {
                state.error.get().map(|message| view! {
                    <div
                        class="flex items-center space-x-3 bg-red-600 text-white px-4 py-3 rounded-lg shadow-lg cursor-pointer"
                        on:click=move |_| state.clear_error()
                    >
                        <span class="text-lg">"✕"</span>
                        <span class="text-sm font-medium">{message}</span>
                    </div>
                })
            }}
        </div>
    }
}
