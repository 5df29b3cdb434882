//! Component Showcase Entry Point

mod app;
mod browser;
mod components;
mod config;
mod context;
mod logger;
mod markdown;
mod models;
mod store;
mod validation;

use app::App;
use config::ShowcaseConfig;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(LevelFilter::Debug);

    let config = ShowcaseConfig::load();
    match config.log_level() {
        Ok(level) => log::set_max_level(level),
        Err(e) => log::warn!("[App] {}", e),
    }
    log::info!("[App] Mounting '{}' with {} menu items", config.title, config.menu.len());

    mount_to_body(move || view! { <App config=config /> });
}
