//! DevAtlas Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod content;
mod context;
mod models;
mod share;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    console_logger::init(log::LevelFilter::Info);
    mount_to_body(App);
}
