//! Lead Console Frontend Entry Point

mod app;
mod commands;
mod components;
mod context;
mod models;
mod persisted;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init_logger("LeadConsole", LevelFilter::Info) {
        web_sys::console::error_1(&format!("logger already initialized: {}", e).into());
    }
    mount_to_body(App);
}
