mod components;
mod config;
mod error;
mod model;
mod save;
mod state;
mod util;

use components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
