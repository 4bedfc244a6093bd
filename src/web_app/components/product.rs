// web_app/components/product.rs - Product display and editing components
//
// - ProductTable: the paginated list rows
// - ProductFormFields: the name/category/price inputs shared by the
//   create and view/edit pages
// - CategorySelect: dropdown restricted to valid categories

use leptos::prelude::*;

use super::common::{FieldInput, PriceDisplay};
use crate::web_app::model::{Category, Product};
use crate::web_app::state::ProductForm;

fn row_stripe(index: usize) -> &'static str {
    if index % 2 == 0 {
        "bg-blue-50"
    } else {
        "bg-white"
    }
}

/// Text of the read-only id field; empty until a product is loaded
fn id_text(form: &ProductForm) -> String {
    form.id.map(|id| id.to_string()).unwrap_or_default()
}

/// Product table component
///
/// One row per product; clicking a row reports its id.
#[component]
pub fn ProductTable(
    /// Rows of the current page
    products: Signal<Vec<Product>>,
    /// Click handler for a row
    on_row_click: Callback<i32>,
) -> impl IntoView {
    view! {
        <div class="rounded-md border border-blue-200 overflow-hidden">
            <table class="w-full text-left">
                <thead>
                    <tr class="bg-blue-100">
                        <th class="px-4 py-2 font-bold">"ID"</th>
                        <th class="px-4 py-2 font-bold">"Product"</th>
                        <th class="px-4 py-2 font-bold">"Category"</th>
                        <th class="px-4 py-2 font-bold">"Price"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || products.get().into_iter().enumerate()
                        key=|(index, product)| (*index, product.id)
                        children=move |(index, product)| {
                            let id = product.id;
                            let stripe = row_stripe(index);
                            view! {
                                <tr
                                    class=format!("{} cursor-pointer hover:bg-blue-200", stripe)
                                    on:click=move |_| on_row_click.run(id)
                                >
                                    <td class="px-4 py-2">{product.id}</td>
                                    <td class="px-4 py-2">{product.name.clone()}</td>
                                    <td class="px-4 py-2">{product.category.to_string()}</td>
                                    <td class="px-4 py-2"><PriceDisplay price=product.price /></td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

/// Category dropdown component
#[component]
pub fn CategorySelect(
    /// Currently selected category
    #[prop(into)]
    value: Signal<Category>,
    on_change: Callback<Category>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label for="category" class="text-sm font-medium text-gray-700">"Category"</label>
            <select
                id="category"
                class="w-full px-4 py-2 border border-gray-300 rounded-lg bg-white \
                       focus:ring-2 focus:ring-blue-500 outline-none cursor-pointer shadow-sm"
                on:change=move |ev| {
                    let raw = event_target_value(&ev);
                    match raw.parse::<i64>().ok().and_then(|n| Category::new(n).ok()) {
                        Some(category) => on_change.run(category),
                        None => tracing::warn!("Ignoring unknown category '{}'", raw),
                    }
                }
            >
                {Category::all().map(|category| view! {
                    <option
                        value=category.to_string()
                        selected=move || value.get() == category
                    >
                        {category.to_string()}
                    </option>
                }).collect_view()}
            </select>
        </div>
    }
}

/// Name, category and price inputs bound to a ProductForm
#[component]
pub fn ProductFormFields(
    form: Signal<ProductForm>,
    on_name: Callback<String>,
    on_category: Callback<Category>,
    on_price: Callback<String>,
    /// Show the read-only id field (view/edit page)
    #[prop(default = false)]
    show_id: bool,
) -> impl IntoView {
    let id_value = Signal::derive(move || form.with(id_text));
    let name = Signal::derive(move || form.with(|f| f.name.clone()));
    let name_error = Signal::derive(move || form.with(|f| f.name_error));
    let category = Signal::derive(move || form.with(|f| f.category));
    let price = Signal::derive(move || form.with(|f| f.price.clone()));
    let price_error = Signal::derive(move || form.with(|f| f.price_error));

    view! {
        <div class="space-y-4">
            <Show when=move || show_id>
                <FieldInput id="id" label="ID" value=id_value disabled=true />
            </Show>
            <FieldInput id="name" label="Name" value=name on_input=on_name error=name_error />
            <CategorySelect value=category on_change=on_category />
            <FieldInput
                id="price"
                label="Price"
                input_type="number"
                prefix="R"
                value=price
                on_input=on_price
                error=price_error
            />
        </div>
    }
}
