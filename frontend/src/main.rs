use crate::app::App;

mod api;
mod app;
mod components;
mod labels;
mod services;

fn main() {
    yew::Renderer::<App>::new().render();
}
