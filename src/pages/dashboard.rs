//! Dashboard Page
//!
//! Summary cards, category breakdown, monthly trend, and the custom date
//! range total.

use leptos::*;

use crate::api;
use crate::api::client::RangeSelection;
use crate::components::{CategoryChart, FlashAlerts, SummaryCard, TrendChart};
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let currency = state.currency;
    let bootstrap = state.bootstrap.clone();

    let monthly_total = bootstrap.monthly_total;
    let recent_total = bootstrap.recent_total;
    let total_expenses = bootstrap.total_expenses;

    view! {
        <div class="space-y-8">
            <FlashAlerts messages=bootstrap.flashes.clone() />

            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Your spending at a glance"</p>
            </div>

            // Summary row
            <section>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <SummaryCard
                        label="This Month"
                        value=Signal::derive(move || currency.get().format(monthly_total))
                        index=0
                        hint="Total spent in the current month"
                    />
                    <SummaryCard
                        label="Last 30 Days"
                        value=Signal::derive(move || currency.get().format(recent_total))
                        index=1
                        hint="Total spent over the last 30 days"
                    />
                    <SummaryCard
                        label="Expenses Logged"
                        value=Signal::derive(move || total_expenses.to_string())
                        index=2
                    />
                </div>
            </section>

            // Charts
            <div class="grid lg:grid-cols-2 gap-8">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Spending by Category"</h2>
                    <CategoryChart categories=bootstrap.category_breakdown.clone() />
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Monthly Trend"</h2>
                    <TrendChart />
                </section>
            </div>

            <CustomRange />

            <RecentActivity />
        </div>
    }
}

/// Custom date range total. Loads the all-time aggregate on mount; a
/// one-sided range is rejected with a blocking prompt before any request.
#[component]
fn CustomRange() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let currency = state.currency;

    let (date_from, set_date_from) = create_signal(String::new());
    let (date_to, set_date_to) = create_signal(String::new());
    let (total_text, set_total_text) = create_signal("—".to_string());
    let (calculating, set_calculating) = create_signal(false);

    let run = move || {
        let selection =
            api::classify_range(&date_from.get_untracked(), &date_to.get_untracked());

        if selection == RangeSelection::Incomplete {
            alert("Please select both From and To dates");
            return;
        }

        set_calculating.set(true);
        spawn_local(async move {
            match api::fetch_custom_range_total(&selection).await {
                Ok(total) => {
                    set_total_text.set(currency.get_untracked().format(total));
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Error fetching custom range total: {}", e).into(),
                    );
                    alert("Error calculating custom range total");
                }
            }
            set_calculating.set(false);
        });
    };

    // All-time total on load
    create_effect(move |_| {
        run();
    });

    let clear = move |_| {
        set_date_from.set(String::new());
        set_date_to.set(String::new());
        run();
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Custom Range"</h2>

            <div class="flex flex-wrap items-end gap-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"From"</label>
                    <input
                        type="date"
                        prop:value=move || date_from.get()
                        on:input=move |ev| set_date_from.set(event_target_value(&ev))
                        class="bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"To"</label>
                    <input
                        type="date"
                        prop:value=move || date_to.get()
                        on:input=move |ev| set_date_to.set(event_target_value(&ev))
                        class="bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <button
                    on:click=move |_| run()
                    disabled=move || calculating.get()
                    class="px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if calculating.get() { "Calculating..." } else { "Calculate" }}
                </button>
                <button
                    on:click=clear
                    class="px-4 py-3 bg-gray-600 hover:bg-gray-500 rounded-lg font-medium
                           transition-colors"
                >
                    "Clear"
                </button>

                <div class="ml-auto text-right">
                    <span class="block text-sm text-gray-400">"Total"</span>
                    <span class="text-2xl font-bold">{move || total_text.get()}</span>
                </div>
            </div>
        </section>
    }
}

/// Latest expenses, embedded by the server at render time
#[component]
fn RecentActivity() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let currency = state.currency;
    let recent = state.recent_expenses;

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Recent Activity"</h2>

            <div class="space-y-2">
                {move || {
                    let rows = recent.get();

                    if rows.is_empty() {
                        view! {
                            <p class="text-gray-400 text-sm">"No recent expenses"</p>
                        }
                        .into_view()
                    } else {
                        rows.into_iter()
                            .take(5)
                            .map(|row| {
                                let amount = row.amount;
                                view! {
                                    <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
                                        <div>
                                            <span>{row.description}</span>
                                            <span class="text-gray-400 text-sm ml-2">
                                                {row.category} " · " {row.date}
                                            </span>
                                        </div>
                                        <span class="font-semibold">
                                            {move || currency.get().format(amount)}
                                        </span>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_view()
                    }
                }}
            </div>
        </section>
    }
}

/// Blocking user notice
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
