// lib.rs - Root module for the product catalog
//
// The library is built twice by cargo-leptos: as an rlib for the actix
// server (feature "ssr") and as a cdylib for the browser (feature
// "hydrate").

pub mod config;
pub mod web_app;

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        /// WASM entry point: attach to the server-rendered markup
        #[wasm_bindgen]
        pub fn hydrate() {
            console_error_panic_hook::set_once();
            leptos::mount::hydrate_body(web_app::App);
        }
    }
}
