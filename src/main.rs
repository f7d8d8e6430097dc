//! To-Do List Frontend Entry Point

mod app;
mod components;
mod console;
mod install;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    console::init(log::LevelFilter::Debug);
    mount_to_body(App);
}
