//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{Header, Toast};
use crate::pages::{Details, Explore, Genre, Home, Search};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    // Image URL prefix for every page
    let state = expect_context::<GlobalState>();
    spawn_local(async move {
        match api::fetch_configuration().await {
            Ok(config) => state.apply_configuration(&config),
            Err(e) => state.show_error(&format!("Failed to fetch configuration: {}", e)),
        }
    });

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <Header />

                <main class="flex-1 pb-16">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/search" view=Search />
                        <Route path="/genre/:name" view=Genre />
                        <Route path="/:explore" view=Explore />
                        <Route path="/:explore/:id" view=Details />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] pt-28 text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-red-600 hover:bg-red-700 rounded-lg font-medium transition-colors"
            >
                "Back to Home"
            </A>
        </div>
    }
}
