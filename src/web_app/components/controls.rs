// web_app/components/controls.rs - List controls
//
// Sorting and paging for the product list. Both components only report
// the user's intent; ProductList decides what the new state is.

use leptos::prelude::*;

use crate::web_app::model::SortOrder;

/// Sort dropdown component
#[component]
pub fn SortDropdown(
    /// Current sort order
    sort: Signal<SortOrder>,
    on_change: Callback<SortOrder>,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 bg-white px-4 py-2 rounded-lg border border-gray-200 shadow-sm">
            <label class="text-sm font-medium text-gray-600">"Sort by:"</label>
            <select
                class="text-sm font-semibold text-gray-800 bg-transparent border-none \
                       focus:ring-0 cursor-pointer pr-8"
                on:change=move |ev| {
                    on_change.run(SortOrder::from_value(&event_target_value(&ev)));
                }
            >
                {SortOrder::ALL.into_iter().map(|order| {
                    view! {
                        <option
                            value=order.as_value()
                            selected=move || sort.get() == order
                        >
                            {order.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

/// Whether Previous and Next are enabled on `current` of `total` pages
fn page_buttons_enabled(current: usize, total: usize) -> (bool, bool) {
    (current > 1, current < total)
}

/// Pagination controls component
///
/// Pages are 1-based, shown as "Page n/total".
#[component]
pub fn Pagination(
    current_page: Signal<usize>,
    total_pages: Signal<usize>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    let can_go_prev = move || page_buttons_enabled(current_page.get(), total_pages.get()).0;
    let can_go_next = move || page_buttons_enabled(current_page.get(), total_pages.get()).1;

    view! {
        <div class="flex justify-between items-center mt-4">
            <button
                type="button"
                class="px-4 py-2 bg-white border border-gray-200 rounded-lg shadow-sm \
                       disabled:opacity-50 disabled:cursor-not-allowed \
                       hover:bg-gray-50 hover:border-gray-300 transition-all font-medium text-gray-700"
                disabled=move || !can_go_prev()
                on:click=move |_| on_prev.run(())
            >
                "← Previous"
            </button>

            <span class="text-sm font-medium text-gray-600 bg-gray-100 px-4 py-2 rounded-lg">
                "Page " {move || current_page.get()} "/" {move || total_pages.get()}
            </span>

            <button
                type="button"
                class="px-4 py-2 bg-white border border-gray-200 rounded-lg shadow-sm \
                       disabled:opacity-50 disabled:cursor-not-allowed \
                       hover:bg-gray-50 hover:border-gray-300 transition-all font-medium text-gray-700"
                disabled=move || !can_go_next()
                on:click=move |_| on_next.run(())
            >
                "Next →"
            </button>
        </div>
    }
}
