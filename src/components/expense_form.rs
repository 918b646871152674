//! Expense Entry Form
//!
//! Form for logging new expenses. The subcategory dropdown repopulates from
//! the server whenever the category selection changes; completions that lose
//! the race to a newer selection are discarded.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;

use crate::api;
use crate::format;
use crate::state::global::{GlobalState, SubcategoryOption};

/// Sentinel id of the default subcategory option
pub const NONE_SUBCATEGORY: u32 = 0;

/// The reset state of the subcategory control: a single "None" option.
pub fn default_subcategory_options() -> Vec<SubcategoryOption> {
    vec![SubcategoryOption {
        id: NONE_SUBCATEGORY,
        name: "None".to_string(),
    }]
}

/// Options after a successful cascade fetch: "None" followed by the
/// server's entries in response order.
pub fn cascade_options(fetched: Vec<SubcategoryOption>) -> Vec<SubcategoryOption> {
    let mut options = default_subcategory_options();
    options.extend(fetched);
    options
}

/// Parse the category select's raw value; empty and the zero sentinel mean
/// no category is picked.
pub fn parse_category_id(raw: &str) -> Option<u32> {
    match raw.trim().parse::<u32>() {
        Ok(0) | Err(_) => None,
        Ok(id) => Some(id),
    }
}

/// Monotonic token issue/check for cascade fetches. A completion only
/// applies while its token is still the latest issued.
#[derive(Debug, Default)]
pub struct CascadeGuard {
    latest: u64,
}

impl CascadeGuard {
    /// Issue a token for a newly started fetch.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Whether a completion holding `token` is still current.
    pub fn is_current(&self, token: u64) -> bool {
        token == self.latest
    }
}

/// Expense entry form component
#[component]
pub fn ExpenseForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (description, set_description) = create_signal(String::new());
    let (amount, set_amount) = create_signal(String::new());
    let (date, set_date) = create_signal(String::new());
    let (category, set_category) = create_signal(String::new());
    let (subcategory, set_subcategory) = create_signal(NONE_SUBCATEGORY.to_string());
    let (submitting, set_submitting) = create_signal(false);

    let subcategory_options = create_rw_signal(default_subcategory_options());
    let guard = Rc::new(RefCell::new(CascadeGuard::default()));

    let category_choices = state.bootstrap.categories.clone();

    let on_category_change = move |ev: web_sys::Event| {
        let raw = event_target_value(&ev);
        set_category.set(raw.clone());

        // Reset first; a picked category then repopulates from the server
        subcategory_options.set(default_subcategory_options());
        set_subcategory.set(NONE_SUBCATEGORY.to_string());

        let Some(category_id) = parse_category_id(&raw) else {
            return;
        };

        let token = guard.borrow_mut().issue();
        let guard = Rc::clone(&guard);

        spawn_local(async move {
            match api::fetch_subcategories(category_id).await {
                Ok(subcategories) => {
                    if guard.borrow().is_current(token) {
                        subcategory_options.set(cascade_options(subcategories));
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Error fetching subcategories: {}", e).into(),
                    );
                }
            }
        });
    };

    let on_amount_blur = move |_| {
        if let Some(normalized) = format::normalize_amount(&amount.get_untracked()) {
            set_amount.set(normalized);
        }
    };

    let state_for_submit = state;
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Ok(parsed_amount) = amount.get_untracked().trim().parse::<f64>() else {
            state_for_submit.show_error("Enter a valid amount");
            return;
        };
        let Some(category_id) = parse_category_id(&category.get_untracked()) else {
            state_for_submit.show_error("Pick a category");
            return;
        };

        let subcategory_id = subcategory
            .get_untracked()
            .parse::<u32>()
            .ok()
            .filter(|id| *id != NONE_SUBCATEGORY);

        let expense = api::NewExpense {
            description: description.get_untracked(),
            amount: parsed_amount,
            date: date.get_untracked(),
            category_id,
            subcategory_id,
        };

        set_submitting.set(true);

        let state_clone = state_for_submit.clone();
        spawn_local(async move {
            match api::create_expense(&expense).await {
                Ok(row) => {
                    let formatted = state_clone.currency.get_untracked().format(row.amount);
                    state_clone.show_success(&format!("Logged {}", formatted));
                    state_clone.record_expense(row);

                    set_description.set(String::new());
                    set_amount.set(String::new());
                    set_subcategory.set(NONE_SUBCATEGORY.to_string());
                }
                Err(e) => {
                    state_clone.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Description"</label>
                <input
                    type="text"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Amount"</label>
                    <input
                        type="number"
                        name="amount"
                        step="0.01"
                        min="0"
                        prop:value=move || amount.get()
                        on:input=move |ev| set_amount.set(event_target_value(&ev))
                        on:blur=on_amount_blur
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Date"</label>
                    <input
                        type="date"
                        prop:value=move || date.get()
                        on:input=move |ev| set_date.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
            </div>

            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Category"</label>
                    <select
                        name="category_id"
                        on:change=on_category_change
                        prop:value=move || category.get()
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        <option value="0">"Select a category"</option>
                        {category_choices
                            .into_iter()
                            .map(|choice| view! {
                                <option value=choice.id.to_string()>{choice.name}</option>
                            })
                            .collect_view()}
                    </select>
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Subcategory"</label>
                    <select
                        on:change=move |ev| set_subcategory.set(event_target_value(&ev))
                        prop:value=move || subcategory.get()
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        {move || {
                            subcategory_options
                                .get()
                                .into_iter()
                                .map(|option| view! {
                                    <option value=option.id.to_string()>{option.name}</option>
                                })
                                .collect_view()
                        }}
                    </select>
                </div>
            </div>

            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                       transition-colors"
            >
                {move || if submitting.get() { "Saving..." } else { "Add Expense" }}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(id: u32, name: &str) -> SubcategoryOption {
        SubcategoryOption {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn reset_is_a_single_none_option() {
        let options = default_subcategory_options();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].id, NONE_SUBCATEGORY);
        assert_eq!(options[0].name, "None");
    }

    #[test]
    fn cascade_appends_in_response_order() {
        let options = cascade_options(vec![sub(1, "Food")]);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].name, "None");
        assert_eq!(options[1].name, "Food");

        let options = cascade_options(vec![sub(3, "Groceries"), sub(1, "Snacks")]);
        let names: Vec<_> = options.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["None", "Groceries", "Snacks"]);
    }

    #[test]
    fn empty_and_zero_selections_mean_no_category() {
        assert_eq!(parse_category_id(""), None);
        assert_eq!(parse_category_id("0"), None);
        assert_eq!(parse_category_id("abc"), None);
        assert_eq!(parse_category_id("5"), Some(5));
    }

    #[test]
    fn stale_tokens_are_discarded() {
        let mut guard = CascadeGuard::default();

        let first = guard.issue();
        assert!(guard.is_current(first));

        let second = guard.issue();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }
}
