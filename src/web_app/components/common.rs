// web_app/components/common.rs - Reusable UI components
//
// These are small, composable components used throughout the application.
// Philosophy: Pure, stateless components that receive all data via props.

use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;
use rust_decimal::Decimal;

use crate::web_app::model::format_price;
use crate::web_app::state::{Notice, ValidationError};

/// Spinner shown while a page's initial fetch is outstanding
#[component]
pub fn Loading(
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center gap-3 py-10" role="status">
            <div class="animate-spin rounded-full h-6 w-6 border-2 border-blue-200 border-t-blue-600"></div>
            <span class="text-gray-500">{message}</span>
        </div>
    }
}

/// Page-level error shown in place of content that failed to load
#[component]
pub fn ErrorDisplay(error: String) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-lg p-4 text-center" role="alert">
            <p class="text-red-600 font-medium">{error}</p>
        </div>
    }
}

const PRIMARY_BUTTON: &str = "px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 \
                              transition-colors disabled:bg-gray-400 disabled:cursor-not-allowed \
                              font-medium shadow-sm active:scale-95";
const SECONDARY_BUTTON: &str = "px-4 py-2 bg-white text-gray-700 rounded-lg hover:bg-gray-50 \
                                transition-colors border border-gray-300 disabled:opacity-50 \
                                font-medium shadow-sm active:bg-gray-100";
const DANGER_BUTTON: &str = "px-4 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700 \
                             transition-colors disabled:bg-gray-400 disabled:cursor-not-allowed \
                             font-medium shadow-sm";

/// `type="button"` element shared by the button variants below
fn styled_button(
    base: &'static str,
    extra: &'static str,
    children: Children,
    on_click: Option<Callback<()>>,
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            disabled=move || disabled.get()
            class=format!("{} {}", base, extra)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Primary button component
#[component]
pub fn Button(
    /// Button label text
    children: Children,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Disabled while a request is in flight
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    styled_button(PRIMARY_BUTTON, class, children, on_click, disabled)
}

/// Secondary button component
///
/// A lighter styled button for navigation and cancel actions.
#[component]
pub fn SecondaryButton(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
) -> impl IntoView {
    styled_button(SECONDARY_BUTTON, "", children, on_click, Signal::stored(false))
}

/// Destructive action button
#[component]
pub fn DangerButton(
    children: Children,
    on_click: Callback<()>,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    styled_button(DANGER_BUTTON, class, children, Some(on_click), disabled)
}

/// Modal wrapper component
///
/// Provides modal backdrop styling. The open/close logic should be
/// handled by the parent.
#[component]
pub fn ModalWrapper(
    /// Modal content
    children: Children,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal title
    #[prop(default = "")]
    title: &'static str,
) -> impl IntoView {
    let handle_keydown = move |ev: KeyboardEvent| {
        if closes_modal(&ev.key()) {
            on_close.run(());
        }
    };

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 text-black"
            on:keydown=handle_keydown
        >
            <div
                class="absolute inset-0 bg-gray-800/50 transition-opacity"
                on:click=move |_| on_close.run(())
            ></div>

            <div
                class="relative bg-white rounded-lg shadow-lg p-4 max-w-sm w-full mx-auto"
                on:click=|ev| ev.stop_propagation()
            >
                <h2 class="text-lg font-semibold">{title}</h2>
                <div class="mt-4">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Keys that dismiss a modal
fn closes_modal(key: &str) -> bool {
    key == "Escape"
}

fn notice_text_class(notice: &Notice) -> &'static str {
    if notice.is_failure() {
        "text-red-600"
    } else {
        "text-gray-700"
    }
}

/// Outcome modal for create/save/delete requests
#[component]
pub fn NoticeModal(
    notice: Notice,
    on_close: Callback<()>,
) -> impl IntoView {
    let text_class = notice_text_class(&notice);

    view! {
        <ModalWrapper title=notice.title() on_close=on_close>
            <p class=text_class>{notice.message()}</p>
            <div class="mt-4 flex justify-end">
                <Button on_click=on_close>"OK"</Button>
            </div>
        </ModalWrapper>
    }
}

/// Yes/no prompt for destructive actions
#[component]
pub fn ConfirmModal(
    #[prop(default = "Confirm Delete")]
    title: &'static str,
    message: &'static str,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <ModalWrapper title=title on_close=on_cancel>
            <p>{message}</p>
            <div class="mt-4 flex justify-end space-x-2">
                <DangerButton on_click=on_confirm>"Delete"</DangerButton>
                <SecondaryButton on_click=on_cancel>"Cancel"</SecondaryButton>
            </div>
        </ModalWrapper>
    }
}

/// Labelled input with an inline validation message
#[component]
pub fn FieldInput(
    /// Element id, also used by the label
    id: &'static str,
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
    /// Receives the raw text on every keystroke
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(into, default = Signal::stored(None))]
    error: Signal<Option<ValidationError>>,
    /// Input type (text, number, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Text shown before the input, e.g. a currency symbol
    #[prop(optional)]
    prefix: Option<&'static str>,
    #[prop(default = false)]
    disabled: bool,
) -> impl IntoView {
    let base_class = "w-full px-4 py-2 border rounded-lg \
                      focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                      outline-none transition-shadow shadow-sm disabled:bg-gray-100";

    view! {
        <div class="space-y-2">
            <label for=id class="text-sm font-medium text-gray-700">{label}</label>
            <div class="flex items-center">
                {prefix.map(|p| view! { <span class="mr-2 text-lg font-semibold">{p}</span> })}
                <input
                    id=id
                    type=input_type
                    disabled=disabled
                    class=move || {
                        let border = if error.get().is_some() { "border-red-500" } else { "border-gray-300" };
                        format!("{} {}", base_class, border)
                    }
                    prop:value=move || value.get()
                    on:input=move |ev| {
                        if let Some(handler) = on_input {
                            handler.run(event_target_value(&ev));
                        }
                    }
                />
            </div>
            {move || error.get().map(|e| view! { <p class="text-red-500 text-sm">{e.to_string()}</p> })}
        </div>
    }
}

/// Price display component
///
/// Formats a price in rand with two decimals.
#[component]
pub fn PriceDisplay(
    /// The price value
    price: Decimal,
    /// Whether to highlight (larger, bolder)
    #[prop(default = false)]
    highlight: bool,
) -> impl IntoView {
    let class = if highlight {
        "text-xl font-bold text-green-600"
    } else {
        "text-gray-900 font-medium"
    };

    view! {
        <span class=class>
            {format_price(price)}
        </span>
    }
}

/// Back-to-list header link
#[component]
pub fn BackLink() -> impl IntoView {
    view! {
        <header class="fixed top-0 left-0 w-full px-4 py-3 flex items-center">
            <a href="/" class="flex items-center gap-2 text-lg font-semibold text-black hover:underline">
                <span aria-hidden="true">"←"</span>
                "Back"
            </a>
        </header>
    }
}
