// web_app/pages/view.rs - View / edit / delete product page
//
// Reads `?id=` once on mount. Without an id the form stays empty and
// nothing is fetched.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;

use super::{use_product_api, use_redirect, use_view_lifetime};
use crate::web_app::api::ProductApi;
use crate::web_app::components::*;
use crate::web_app::model::Category;
use crate::web_app::state::ProductEditor;

#[component]
pub fn ProductViewPage() -> impl IntoView {
    let api = use_product_api();
    let lifetime = use_view_lifetime();
    let redirect = use_redirect();

    let query_id = use_query_map().with_untracked(|query| query.get("id"));
    let (editor, fetch_id) = ProductEditor::activate(query_id.as_deref());
    let state = RwSignal::new(editor);

    let token = lifetime.token();
    Effect::new(move |_| {
        let Some(id) = fetch_id else {
            return;
        };
        let api = api.get_value();
        let token = token.clone();
        spawn_local(async move {
            let result = api.get_product(id).await;
            token.apply("product", || state.update(|s| s.finish_load(result)));
        });
    });

    let form = Signal::derive(move || state.with(|s| s.form.clone()));
    let in_flight = Signal::derive(move || state.with(|s| s.in_flight));
    let loading = Signal::derive(move || state.with(|s| s.load_state.is_loading()));
    let load_error = Memo::new(move |_| state.with(|s| s.load_state.error().map(str::to_string)));
    let notice = Memo::new(move |_| state.with(|s| s.notice.clone()));
    let delete_prompt_open = Memo::new(move |_| state.with(|s| s.delete_prompt_open));

    let on_name = Callback::new(move |value: String| state.update(|s| s.edit_name(value)));
    let on_category = Callback::new(move |category: Category| state.update(|s| s.edit_category(category)));
    let on_price = Callback::new(move |value: String| state.update(|s| s.edit_price(value)));

    let save_token = lifetime.token();
    let on_save = Callback::new(move |()| {
        let mut snapshot = None;
        state.update(|s| snapshot = s.begin_save());
        let Some(product) = snapshot else {
            return;
        };

        let api = api.get_value();
        let token = save_token.clone();
        spawn_local(async move {
            let result = api.update_product(&product).await;
            token.apply("update", || state.update(|s| s.finish_save(result)));
        });
    });

    let on_request_delete = Callback::new(move |()| state.update(|s| s.request_delete()));
    let on_cancel_delete = Callback::new(move |()| state.update(|s| s.cancel_delete()));

    let delete_token = lifetime.token();
    let on_confirm_delete = Callback::new(move |()| {
        let mut target = None;
        state.update(|s| target = s.begin_delete());
        let Some(id) = target else {
            return;
        };

        let api = api.get_value();
        let token = delete_token.clone();
        spawn_local(async move {
            let result = api.delete_product(id).await;
            token.apply("delete", || {
                let mut route = None;
                state.update(|s| route = s.finish_delete(result));
                if route.is_some() {
                    redirect.set(route);
                }
            });
        });
    });

    let on_dismiss = Callback::new(move |()| {
        let mut route = None;
        state.update(|s| route = s.dismiss_notice());
        if route.is_some() {
            redirect.set(route);
        }
    });

    view! {
        <div class="min-h-screen bg-blue-50 flex items-center justify-center p-4">
            <BackLink />
            <div class="w-full max-w-md bg-white rounded-lg shadow-lg">
                <div class="px-6 pt-6">
                    <h1 class="text-2xl font-bold">"View Product"</h1>
                </div>
                <div class="p-6 space-y-4">
                    {move || load_error.get().map(|error| view! { <ErrorDisplay error=error /> })}
                    <Show
                        when=move || !loading.get()
                        fallback=|| view! { <Loading message="Loading product..." /> }
                    >
                        <ProductFormFields
                            form=form
                            on_name=on_name
                            on_category=on_category
                            on_price=on_price
                            show_id=true
                        />
                    </Show>
                </div>
                <div class="px-6 pb-6 flex justify-between space-x-4">
                    <Button on_click=on_save disabled=in_flight class="flex-1">"Save Changes"</Button>
                    <DangerButton on_click=on_request_delete disabled=in_flight class="flex-1">
                        "Delete Product"
                    </DangerButton>
                </div>
            </div>
            {move || notice.get().map(|notice| view! {
                <NoticeModal notice=notice on_close=on_dismiss />
            })}
            <Show when=move || delete_prompt_open.get()>
                <ConfirmModal
                    message="Are you sure you want to delete this product?"
                    on_confirm=on_confirm_delete
                    on_cancel=on_cancel_delete
                />
            </Show>
        </div>
    }
}
