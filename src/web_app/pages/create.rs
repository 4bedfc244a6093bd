// web_app/pages/create.rs - Create product page

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{use_product_api, use_redirect, use_view_lifetime};
use crate::web_app::api::ProductApi;
use crate::web_app::components::*;
use crate::web_app::model::Category;
use crate::web_app::state::ProductCreate;

#[component]
pub fn ProductCreatePage() -> impl IntoView {
    let api = use_product_api();
    let lifetime = use_view_lifetime();
    let redirect = use_redirect();
    let state = RwSignal::new(ProductCreate::new());

    let form = Signal::derive(move || state.with(|s| s.form.clone()));
    let in_flight = Signal::derive(move || state.with(|s| s.in_flight));
    let notice = Memo::new(move |_| state.with(|s| s.notice.clone()));

    let on_name = Callback::new(move |value: String| state.update(|s| s.edit_name(value)));
    let on_category = Callback::new(move |category: Category| state.update(|s| s.edit_category(category)));
    let on_price = Callback::new(move |value: String| state.update(|s| s.edit_price(value)));

    let token = lifetime.token();
    let on_submit = Callback::new(move |()| {
        let mut payload = None;
        state.update(|s| payload = s.begin_submit());
        let Some(payload) = payload else {
            return;
        };

        let api = api.get_value();
        let token = token.clone();
        spawn_local(async move {
            let result = api.create_product(&payload).await;
            token.apply("create", || state.update(|s| s.finish_submit(result)));
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
                    <h1 class="text-2xl font-bold">"Create Product"</h1>
                </div>
                <div class="p-6">
                    <ProductFormFields
                        form=form
                        on_name=on_name
                        on_category=on_category
                        on_price=on_price
                    />
                </div>
                <div class="px-6 pb-6 flex justify-between space-x-4">
                    <Button on_click=on_submit disabled=in_flight class="flex-1">"Create"</Button>
                </div>
            </div>
            {move || notice.get().map(|notice| view! {
                <NoticeModal notice=notice on_close=on_dismiss />
            })}
        </div>
    }
}
