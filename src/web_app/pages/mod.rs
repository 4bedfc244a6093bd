// web_app/pages/mod.rs - Page components module
//
// - ProductListPage: sortable, paginated product table
// - ProductCreatePage: new product form
// - ProductViewPage: view, edit and delete one product
//
// Every page owns its state privately, opens a ViewLifetime on mount and
// ends it on cleanup, so responses for an unmounted page are dropped.

pub mod create;
pub mod list;
pub mod view;

pub use create::ProductCreatePage;
pub use list::ProductListPage;
pub use view::ProductViewPage;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::web_app::api::HttpProductApi;
use crate::web_app::routes::AppRoute;
use crate::web_app::state::ViewLifetime;

/// ProductsAPI client owned by the current page
///
/// Stored locally: the browser client is not guaranteed to be `Send`.
fn use_product_api() -> StoredValue<HttpProductApi, LocalStorage> {
    StoredValue::new_local(HttpProductApi::default())
}

/// Lifetime of the current page, ended when its owner is cleaned up
fn use_view_lifetime() -> ViewLifetime {
    let lifetime = ViewLifetime::new();
    on_cleanup({
        let lifetime = lifetime.clone();
        move || lifetime.end()
    });
    lifetime
}

/// Navigate whenever a route is pushed into the returned signal
fn use_redirect() -> RwSignal<Option<AppRoute>> {
    let target = RwSignal::new(None::<AppRoute>);
    let navigate = use_navigate();

    Effect::new(move |_| {
        if let Some(route) = target.get() {
            navigate(&route.path(), NavigateOptions::default());
        }
    });

    target
}
