//! Header Component
//!
//! Site header with brand mark, primary navigation, search field and the
//! profile dropdown. All state transitions live in `lukoba::header`; this
//! module binds them to the Leptos router and the browser document.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;
use leptos_router::{use_location, use_navigate, NavigateOptions, A};
use lukoba::header::{
    observe_presses, project_links, DismissibleMenu, Location, MenuAction, MenuItem,
    NavConfig, PressSource, Region, Router, SearchSynchronizer, Subscription, GENRE_LINKS,
};
use wasm_bindgen::JsCast;

/// `Router` over the Leptos location memos and navigate function
#[derive(Clone)]
pub struct LeptosRouter {
    location: leptos_router::Location,
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl LeptosRouter {
    /// Must be called inside a `<Router>`
    pub fn current() -> Self {
        Self {
            location: use_location(),
            navigate: Rc::new(use_navigate()),
        }
    }
}

impl Router for LeptosRouter {
    fn location(&self) -> Location {
        Location::new(self.location.pathname.get(), self.location.search.get())
    }

    fn navigate(&self, href: &str) {
        (self.navigate)(href, NavigateOptions::default());
    }

    fn is_active(&self, target: &str) -> bool {
        self.location
            .pathname
            .with(|pathname| link_matches(target, pathname))
    }
}

/// Active rule of `leptos_router`'s `<A>` (non-exact), so the highlight
/// and the `aria-current` it sets always agree: paths compare
/// case-insensitively, segment by segment, up to the shorter one.
pub fn link_matches(href: &str, pathname: &str) -> bool {
    let path = href
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    let current = pathname.to_lowercase();
    current
        .split('/')
        .zip(path.split('/'))
        .all(|(current, path)| current == path)
}

/// Document-wide `mousedown` events
pub struct DocumentPresses;

impl PressSource for DocumentPresses {
    type Target = web_sys::Node;

    fn subscribe(&self, handler: Box<dyn FnMut(&web_sys::Node)>) -> Subscription {
        let handler = RefCell::new(handler);
        let handle = window_event_listener(ev::mousedown, move |event| {
            let Some(node) = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            else {
                return;
            };
            if let Ok(mut handler) = handler.try_borrow_mut() {
                handler(&node);
            }
        });
        Subscription::new(move || handle.remove())
    }
}

/// The profile trigger and its dropdown
#[derive(Clone, Copy)]
pub struct ProfileRegion(pub NodeRef<html::Div>);

impl Region for ProfileRegion {
    type Target = web_sys::Node;

    fn contains(&self, target: &web_sys::Node) -> Option<bool> {
        self.0.get_untracked().map(|element| element.contains(Some(target)))
    }
}

/// Site header
#[component]
pub fn Header(
    /// Leave the Home entry out of the primary navigation
    #[prop(optional)]
    hide_home: bool,
) -> impl IntoView {
    let router = LeptosRouter::current();

    let search = create_rw_signal(SearchSynchronizer::mount(&router));
    let menu = create_rw_signal(DismissibleMenu::new());
    let profile_ref = create_node_ref::<html::Div>();

    let mut outside_presses = observe_presses(
        &DocumentPresses,
        ProfileRegion(profile_ref),
        move |inside| menu.update(|m| m.observe_press(inside)),
    );
    on_cleanup(move || outside_presses.release());

    let nav_config = NavConfig::standard().hide_home(hide_home);
    let links = {
        let router = router.clone();
        create_memo(move |_| project_links(&nav_config, &router))
    };

    let on_input = {
        let router = router.clone();
        move |ev: ev::Event| {
            let text = event_target_value(&ev);
            if let Some(request) = search.try_update(|s| s.edit(text)).flatten() {
                request.dispatch(&router);
            }
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        search.with_untracked(SearchSynchronizer::submit);
    };

    let on_select = Callback::new(move |item: MenuItem| {
        match menu.try_update(|m| m.select(item)) {
            Some(MenuAction::Navigate(location)) => router.navigate(&location.href()),
            Some(MenuAction::SignOut) => {
                web_sys::console::log_1(&"Sign out requested".into());
            }
            None => {}
        }
    });

    view! {
        <header class="fixed top-0 w-full z-50 bg-gradient-to-b from-black to-transparent">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Brand and primary navigation
                    <div class="flex items-center">
                        <A href="/" class="flex items-center mr-6">
                            <img src="/logo.png" alt="Lukoba" width="120" class="object-contain max-h-15" />
                        </A>

                        <nav class="hidden lg:flex items-center space-x-1">
                            {move || {
                                links
                                    .get()
                                    .into_iter()
                                    .map(|link| {
                                        let class = format!(
                                            "px-4 py-2 text-sm font-medium hover:bg-gray-800 rounded-md transition-colors {}",
                                            link.css_class()
                                        );
                                        view! { <A href=link.path class=class>{link.label}</A> }
                                    })
                                    .collect_view()
                            }}
                        </nav>
                    </div>

                    <div class="flex items-center space-x-6">
                        // Search
                        <div class="relative">
                            <form
                                class=move || {
                                    let bg = if search.with(SearchSynchronizer::is_focused) {
                                        "bg-gray-900"
                                    } else {
                                        "bg-gray-800"
                                    };
                                    format!("flex items-center {} rounded-full overflow-hidden pr-2", bg)
                                }
                                on:submit=on_submit
                            >
                                <input
                                    type="text"
                                    placeholder="Search movies, shows..."
                                    class="bg-transparent pl-4 pr-2 py-2 outline-none border-none w-48 text-sm"
                                    prop:value=move || search.with(|s| s.text().to_string())
                                    on:input=on_input
                                    on:focus=move |_| search.update(SearchSynchronizer::focus)
                                    on:blur=move |_| search.update(SearchSynchronizer::blur)
                                />
                                <button class="text-xl text-gray-400 hover:text-white transition-colors">
                                    "⌕"
                                </button>
                            </form>
                        </div>

                        // Profile dropdown
                        <div class="relative" node_ref=profile_ref>
                            <button
                                class="flex items-center space-x-2 focus:outline-none"
                                on:click=move |_| menu.update(DismissibleMenu::toggle)
                            >
                                <div class="w-8 h-8 rounded-full overflow-hidden border-2 border-gray-700 hover:border-red-500 transition-all">
                                    <img src="/user.png" alt="User" class="w-full h-full object-cover" />
                                </div>
                                <span class=move || {
                                    format!(
                                        "text-gray-400 transition-transform {}",
                                        menu.with(|m| m.indicator().css_class())
                                    )
                                }>"▾"</span>
                            </button>

                            <Show when=move || menu.with(DismissibleMenu::is_open)>
                                <ProfileMenu on_select=on_select />
                            </Show>
                        </div>
                    </div>
                </div>
            </div>

            <GenreBar />
        </header>
    }
}

/// Dropdown body
#[component]
fn ProfileMenu(on_select: Callback<MenuItem>) -> impl IntoView {
    view! {
        <div class="absolute right-0 mt-2 w-48 bg-gray-900 rounded-md shadow-lg py-1 z-50 border border-gray-800">
            <div class="px-4 py-3 border-b border-gray-800">
                <p class="text-sm font-medium text-white">"User Name"</p>
                <p class="text-xs text-gray-400">"user@example.com"</p>
            </div>
            {MenuItem::ALL
                .into_iter()
                .map(|item| {
                    let divider = item
                        .path()
                        .is_none()
                        .then(|| view! { <div class="border-t border-gray-800 mt-1"></div> });
                    view! {
                        {divider}
                        <button
                            class="w-full text-left flex items-center px-4 py-2 text-sm text-gray-300 hover:bg-gray-800 hover:text-white"
                            on:click=move |_| on_select.call(item)
                        >
                            {item.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Secondary bar of genres and featured listings
#[component]
fn GenreBar() -> impl IntoView {
    view! {
        <div class="hidden lg:block bg-black bg-opacity-50 border-t border-gray-800">
            <div class="container mx-auto px-4">
                <div class="flex items-center h-10 text-xs">
                    {GENRE_LINKS
                        .into_iter()
                        .map(|link| {
                            let class = if link.highlighted {
                                "text-red-500 hover:text-red-400 px-3 ml-auto font-medium"
                            } else {
                                "text-gray-400 hover:text-white px-3"
                            };
                            view! { <A href=link.path class=class>{link.label}</A> }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_matches_sections() {
        assert!(link_matches("/movie", "/movie"));
        assert!(link_matches("/movie", "/movie/603"));
        assert!(!link_matches("/movie", "/tv"));
        assert!(!link_matches("/movie", "/movies"));
    }

    #[test]
    fn test_link_matches_ignores_case() {
        assert!(link_matches("/movie", "/Movie"));
        assert!(link_matches("/TV", "/tv/1399"));
    }

    #[test]
    fn test_link_matches_home_only_at_root() {
        assert!(link_matches("/", "/"));
        assert!(!link_matches("/", "/movie"));
        assert!(!link_matches("/", "/search"));
    }

    #[test]
    fn test_link_matches_drops_query_and_fragment() {
        assert!(link_matches("/search?q=dune", "/search"));
        assert!(link_matches("/movie#top", "/movie/603"));
    }
}
