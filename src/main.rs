//! Notes IDE Frontend Entry Point

mod models;
mod tree;
mod content;
mod checklist;
mod kanban;
mod state;
mod store;
mod config;
mod context;
mod editor;
mod markdown;
mod upload;
mod components;
mod app;

use app::App;
use config::IdeConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = IdeConfig::load();
    if let Err(err) = rolling_logger::init(rolling_logger::parse_level(&config.log_level), config.log_capacity) {
        web_sys::console::warn_1(&format!("[IDE] Logger already set: {}", err).into());
    }
    log::info!("Starting with {} top-level nodes", config.initial_structure.len());

    mount_to_body(move || view! { <App config=config.clone() /> });
}
