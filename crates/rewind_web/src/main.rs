//! Browser front end for rewind tic-tac-toe.
//!
//! Build with `trunk serve` from this crate's directory; the game mounts
//! into the element named by `mount_id` in `rewind.toml`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod components;
mod config;
mod logging;

use components::Game;
use config::WebConfig;
use leptos::prelude::*;
use tracing::{error, info, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = WebConfig::load();
    let config = loaded.clone().unwrap_or_default();

    if let Some(rejected) = logging::init(config.log_level()) {
        warn!(directive = %config.log_level(), error = %rejected, "Invalid log filter, using info");
    }
    if let Err(e) = loaded {
        warn!(error = %e, "Falling back to default config");
    }

    info!(mount_id = %config.mount_id(), "Starting rewind");
    mount(config.mount_id());
}

/// Attaches the component tree once, to the configured element or to `<body>`.
fn mount(mount_id: &str) {
    let target = document()
        .get_element_by_id(mount_id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());

    match target {
        Some(root) => leptos::mount::mount_to(root, Game).forget(),
        None => {
            error!(mount_id, "Mount element not found, mounting on body");
            leptos::mount::mount_to_body(Game);
        }
    }
}
