#![allow(warnings)]
//! Kanri Frontend Entry Point

mod models;
mod config;
mod api;
mod board;
mod context;
mod session;
mod store;
mod markdown;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
