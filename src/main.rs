mod catalog;
mod components;
mod config;
mod embed;
mod error;
mod filter;
mod model;
mod state;
mod util;

use components::app::App;

fn main() {
    #[cfg(target_family = "wasm")]
    console_error_panic_hook::set_once();

    yew::Renderer::<App>::new().render();
}
