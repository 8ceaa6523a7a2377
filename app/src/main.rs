//! folio: interactivity for a static portfolio page, compiled to WebAssembly.

mod app;
mod components;
mod dom;
mod reveal;
mod submit;

use tracing::Level;

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(e) = dioxus_logger::init(level) {
        web_sys::console::error_1(&format!("logger init failed: {e}").into());
    }
    dom::install_error_logging();

    tracing::info!("starting portfolio frontend");
    dioxus::launch(app::App);
}
