//! # fittrack-client
//!
//! Leptos + WASM frontend shell for the fitness tracking application.
//! Replaces the React SPA in front of the Spring gateway with a Rust-native
//! UI layer.
//!
//! The crate's center of gravity is the session core: the identity
//! capability owned by the OAuth provider ([`identity`]), the store of
//! record ([`state::session`]), the bridge reconciling one into the other
//! ([`state::bridge`]), and the route authority deciding which screens the
//! reconciled state admits ([`route`]). Pages and components are thin
//! consumers of that core.

pub mod app;
pub mod components;
pub mod identity;
pub mod net;
pub mod pages;
pub mod route;
pub mod state;

/// WASM entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
