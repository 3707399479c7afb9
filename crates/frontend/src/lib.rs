//! PathoScope Dashboard - Yew WASM Frontend
//!
//! Single-page workstation UI for submitting a histology patch to an
//! external inference backend and reviewing the returned classification.

mod api;
mod app;
mod components;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}
