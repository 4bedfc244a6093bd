// web_app/pages/list.rs - Product list page
//
// Fetches the whole collection once when mounted, then sorts and pages
// it client-side.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{use_product_api, use_redirect, use_view_lifetime};
use crate::web_app::api::ProductApi;
use crate::web_app::components::*;
use crate::web_app::model::{Product, SortOrder};
use crate::web_app::routes::AppRoute;
use crate::web_app::state::{LoadState, ProductList};

/// What the page body shows
#[derive(Clone, Debug, PartialEq)]
enum ListPhase {
    Loading,
    Failed(String),
    Empty,
    Ready,
}

impl ListPhase {
    fn of(products: &LoadState<Vec<Product>>) -> Self {
        match products {
            LoadState::Idle | LoadState::Loading => ListPhase::Loading,
            LoadState::Failed(message) => ListPhase::Failed(message.clone()),
            LoadState::Loaded(products) if products.is_empty() => ListPhase::Empty,
            LoadState::Loaded(_) => ListPhase::Ready,
        }
    }
}

#[component]
pub fn ProductListPage() -> impl IntoView {
    let api = use_product_api();
    let lifetime = use_view_lifetime();
    let redirect = use_redirect();
    let state = RwSignal::new(ProductList::new());

    // Effects only run in the browser, so the fetch never happens during SSR
    let token = lifetime.token();
    Effect::new(move |_| {
        state.update(|s| s.begin_load());
        let api = api.get_value();
        let token = token.clone();
        spawn_local(async move {
            let result = api.list_products().await;
            token.apply("product list", || state.update(|s| s.finish_load(result)));
        });
    });

    // Only re-render the page body when the load phase changes
    let phase = Memo::new(move |_| state.with(|s| ListPhase::of(&s.products)));
    let sort = Signal::derive(move || state.with(|s| s.sort));
    let current_page = Signal::derive(move || state.with(|s| s.page()));
    let total_pages = Signal::derive(move || state.with(|s| s.page_count()));
    let rows = Signal::derive(move || state.with(|s| s.current_page_items()));

    let on_sort = Callback::new(move |order: SortOrder| state.update(|s| s.set_sort(order)));
    let on_prev = Callback::new(move |()| state.update(|s| s.prev_page()));
    let on_next = Callback::new(move |()| state.update(|s| s.next_page()));
    let on_row_click = Callback::new(move |id: i32| redirect.set(Some(AppRoute::View(id))));
    let on_create = Callback::new(move |()| redirect.set(Some(AppRoute::Create)));

    view! {
        <div class="min-h-screen bg-blue-50 py-8 text-black">
            <div class="container mx-auto bg-white rounded-lg shadow-lg p-8">
                {move || match phase.get() {
                    ListPhase::Loading => view! {
                        <Loading message="Loading..." />
                    }.into_any(),
                    ListPhase::Failed(message) => view! {
                        <ErrorDisplay error=message />
                    }.into_any(),
                    ListPhase::Empty => view! {
                        <div class="text-center text-gray-500 py-12 space-y-4">
                            <p>"No products available"</p>
                            <SecondaryButton on_click=on_create>"Create Product"</SecondaryButton>
                        </div>
                    }.into_any(),
                    ListPhase::Ready => view! {
                        <div>
                            <div class="flex justify-between items-center mb-4">
                                <h1 class="text-2xl font-bold">"Products"</h1>
                                <SortDropdown sort=sort on_change=on_sort />
                                <SecondaryButton on_click=on_create>"Create Product"</SecondaryButton>
                            </div>
                            <ProductTable products=rows on_row_click=on_row_click />
                            <Pagination
                                current_page=current_page
                                total_pages=total_pages
                                on_prev=on_prev
                                on_next=on_next
                            />
                        </div>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}
