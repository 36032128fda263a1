//! Lukoba
//!
//! Movie and TV browsing app built with Leptos (WASM).
//!
//! # Features
//!
//! - Trending banner and listings
//! - Search-as-you-type from the header
//! - TV, movie, genre and details pages
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Movie data comes from The Movie Database through the Lukoba
//! server's `/api/tmdb` proxy, which holds the access token.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
