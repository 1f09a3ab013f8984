mod components;
mod config;
mod error;
mod hooks;
mod model;
mod state;
mod util;

use components::{App, AppProps};
use config::ViewerConfig;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger init failed: {err}").into());
    }
    let config = ViewerConfig::load();
    log::info!("product designer starting, zoom {}..{}", config.min_scale, config.max_scale);
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
