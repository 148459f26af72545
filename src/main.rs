#![allow(warnings)]
//! Wedding Site Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod logging;
mod markdown;
mod models;
mod reveal;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    logging::print_banner();
    mount_to_body(App);
}
