#![allow(warnings)]
//! Study Tracker Frontend Entry Point

mod models;
mod ordered;
mod fields;
mod validation;
mod error;
mod config;
mod logging;
mod context;
mod store;
mod api;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let (config, load_problem) = AppConfig::load();
    let (level, level_problem) = match config.log_level() {
        Ok(level) => (level, None),
        Err(err) => (LevelFilter::Info, Some(err)),
    };
    logging::init(level);
    for problem in [load_problem, level_problem].into_iter().flatten() {
        log::warn!("[APP] Configuration problem, using defaults: {}", problem);
    }
    log::info!("[APP] Starting against {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
