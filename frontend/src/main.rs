use crate::app::App;

mod api;
mod app;
mod components;
mod poll;

fn main() {
    yew::Renderer::<App>::new().render();
}
