//! # chat-widget
//!
//! Leptos + WASM chat widget for the coach page. Renders user and bot
//! messages in a scrolling panel, posts each question to the ask endpoint,
//! and shows a typing indicator while a reply is outstanding.
//!
//! This crate contains the page, components, widget state, endpoint types,
//! and configuration. The endpoint itself and chat persistence live on the
//! host server.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered [`app::App`].
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    log::info!("hydrating chat widget");
    leptos::mount::hydrate_body(app::App);
}
