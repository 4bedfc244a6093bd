// web_app/mod.rs - Root module for the Leptos web application
//
// Architecture:
// - model/: Wire types for the ProductsAPI (used by both client and server)
// - api/: ProductApi trait and its reqwest implementation
// - state/: Headless per-page state (list, create, view/edit)
// - routes.rs: Navigation targets
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod api;
pub mod model;
pub mod routes;
pub mod state;

// Components, pages, and app are used by both server and client
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
