//! Character Favorites Frontend Entry Point

mod models;
mod store;
mod favorites;
mod catalog;
mod logging;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
