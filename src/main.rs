//! HTN Events Frontend Entry Point

mod api;
mod app;
mod auth;
mod components;
mod config;
mod context;
mod error;
mod filter;
mod logging;
mod models;
mod order;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
