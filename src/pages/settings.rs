//! Settings Page
//!
//! API connection and display preferences.

use leptos::*;

use crate::api;
use crate::format::{self, Currency};
use crate::state::global::GlobalState;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-gray-400 mt-1">"Configure your FinTrack dashboard"</p>
            </div>

            <ApiSettings />
            <CurrencySettings />
        </div>
    }
}

/// API connection settings
#[component]
fn ApiSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (testing, set_testing) = create_signal(false);
    let (test_result, set_test_result) = create_signal(None::<bool>);

    let state_for_test = state.clone();
    let test_connection = move |_| {
        set_testing.set(true);
        set_test_result.set(None);

        let url = api_url.get();
        api::set_api_base(&url);

        let state_clone = state_for_test.clone();
        spawn_local(async move {
            match api::check_connection().await {
                Ok(_) => {
                    set_test_result.set(Some(true));
                    state_clone.show_success("Connection successful!");
                }
                Err(e) => {
                    set_test_result.set(Some(false));
                    state_clone.show_error(&format!("Connection failed: {}", e));
                }
            }
            set_testing.set(false);
        });
    };

    let state_for_save = state;
    let save_url = move |_| {
        api::set_api_base(&api_url.get());
        state_for_save.show_success("API URL saved");
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"API Connection"</h2>

            <div class="space-y-4">
                // API URL
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Tracker API URL"</label>
                    <div class="flex space-x-2">
                        <input
                            type="text"
                            placeholder="Same origin when empty"
                            prop:value=move || api_url.get()
                            on:input=move |ev| set_api_url.set(event_target_value(&ev))
                            class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                        <button
                            on:click=test_connection
                            disabled=move || testing.get()
                            class="px-4 py-3 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || if testing.get() { "Testing..." } else { "Test" }}
                        </button>
                        <button
                            on:click=save_url
                            class="px-4 py-3 bg-primary-600 hover:bg-primary-700
                                   rounded-lg font-medium transition-colors"
                        >
                            "Save"
                        </button>
                    </div>
                </div>

                // Connection status
                <div class="flex items-center space-x-2">
                    <span class="text-sm text-gray-400">"Status:"</span>
                    {move || {
                        match test_result.get() {
                            Some(true) => view! {
                                <span class="text-green-400">"✓ Connected"</span>
                            }.into_view(),
                            Some(false) => view! {
                                <span class="text-red-400">"✕ Failed"</span>
                            }.into_view(),
                            None => view! {
                                <span class="text-gray-400">"Not tested"</span>
                            }.into_view(),
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

/// Currency strategy selection
#[component]
fn CurrencySettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let currency = state.currency;

    let choose = move |choice: Currency| {
        currency.set(choice);
        format::store_currency(choice);
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Currency"</h2>
            <p class="text-gray-400 text-sm mb-4">
                "Every amount on the dashboard is formatted with the selected currency."
            </p>

            <div class="flex space-x-2">
                <CurrencyButton label="$ USD" target=Currency::Usd current=currency on_click=choose />
                <CurrencyButton label="₹ INR" target=Currency::Inr current=currency on_click=choose />
            </div>

            <p class="text-sm text-gray-400 mt-4">
                "Preview: "
                <span class="text-white">{move || currency.get().format(123456.78)}</span>
            </p>
        </section>
    }
}

#[component]
fn CurrencyButton(
    label: &'static str,
    target: Currency,
    current: RwSignal<Currency>,
    on_click: impl Fn(Currency) + 'static,
) -> impl IntoView {
    view! {
        <button
            on:click=move |_| on_click(target)
            class=move || {
                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if current.get() == target {
                    format!("{} bg-primary-600 text-white", base)
                } else {
                    format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", base)
                }
            }
        >
            {label}
        </button>
    }
}
