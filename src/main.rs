mod api;
mod app;
mod config;
mod error;
mod model;
mod roster;
mod status;
mod view;

use api::{BackendHandle, RosterApi};
use app::{App, AppProps};
use config::Config;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn main() {
    let config = Config::from_document();
    let backend = BackendHandle::new(RosterApi::new(&config));
    yew::Renderer::<App>::with_props(AppProps { backend, config }).render();
}
