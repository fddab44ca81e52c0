//! Packing List Frontend Entry Point

mod models;
mod error;
mod config;
mod item_list;
mod draft;
mod stats;
mod storage;
mod repository;
mod store;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    if let Err(e) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("logger already installed: {}", e).into());
    }

    mount_to_body(move || view! { <App config=config /> });
}
