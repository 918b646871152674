//! Expenses Page
//!
//! Expense entry form and listing.

use leptos::*;

use crate::components::{DeleteLink, ExpenseForm};
use crate::state::global::GlobalState;

/// Expenses page component
#[component]
pub fn Expenses() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let currency = state.currency;
    let expenses = state.recent_expenses;

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Expenses"</h1>
                <p class="text-gray-400 mt-1">"Log and manage your expenses"</p>
            </div>

            <div class="grid lg:grid-cols-2 gap-8">
                // Entry form
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Add Expense"</h2>
                    <ExpenseForm />
                </section>

                // Listing
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Latest"</h2>

                    <div class="space-y-2">
                        {move || {
                            let rows = expenses.get();

                            if rows.is_empty() {
                                view! {
                                    <p class="text-gray-400 text-sm">
                                        "No expenses yet. Add your first one!"
                                    </p>
                                }
                                .into_view()
                            } else {
                                rows.into_iter()
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
                                                <div class="flex items-center space-x-4">
                                                    <span class="font-semibold">
                                                        {move || currency.get().format(amount)}
                                                    </span>
                                                    <DeleteLink href=format!("/expenses/delete/{}", row.id) />
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                                    .into_view()
                            }
                        }}
                    </div>
                </section>
            </div>
        </div>
    }
}
