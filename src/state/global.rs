//! Global Application State
//!
//! Reactive state management using Leptos signals. The server-embedded
//! page data is carried as one immutable [`BootstrapData`] value instead of
//! being read from ambient page globals.

use leptos::*;

use crate::format::{self, Currency};

/// Element id of the JSON block the server embeds in the host page
const BOOTSTRAP_ELEMENT_ID: &str = "fintrack-bootstrap";

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Server-embedded dashboard data, read once at load
    pub bootstrap: BootstrapData,
    /// Active currency formatting strategy
    pub currency: RwSignal<Currency>,
    /// Expense listing, seeded from the bootstrap block
    pub recent_expenses: RwSignal<Vec<ExpenseRow>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// One slice of the category breakdown
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CategoryTotal {
    pub name: String,
    pub total: f64,
}

/// One point of the monthly trend series
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct MonthlyPoint {
    pub month: String,
    pub total: f64,
}

/// A subcategory choice for the dependent dropdown
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SubcategoryOption {
    pub id: u32,
    pub name: String,
}

/// A category choice for the expense form
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CategoryOption {
    pub id: u32,
    pub name: String,
}

/// A row of the expense listing
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ExpenseRow {
    pub id: u32,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: String,
}

/// Dashboard data the server renders into the host page
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct BootstrapData {
    #[serde(default)]
    pub category_breakdown: Vec<CategoryTotal>,
    #[serde(default)]
    pub monthly_total: f64,
    #[serde(default)]
    pub recent_total: f64,
    #[serde(default)]
    pub total_expenses: u64,
    #[serde(default)]
    pub recent_expenses: Vec<ExpenseRow>,
    #[serde(default)]
    pub categories: Vec<CategoryOption>,
    #[serde(default)]
    pub flashes: Vec<String>,
}

/// Read the embedded bootstrap block from the host page. A missing or
/// malformed block degrades to the empty default.
pub fn read_bootstrap() -> BootstrapData {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(BOOTSTRAP_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match raw {
        Some(text) => match serde_json::from_str(&text) {
            Ok(data) => data,
            Err(e) => {
                web_sys::console::error_1(&format!("Malformed bootstrap data: {}", e).into());
                BootstrapData::default()
            }
        },
        None => BootstrapData::default(),
    }
}

/// Provide global state to the component tree
pub fn provide_global_state(bootstrap: BootstrapData) {
    let state = GlobalState {
        currency: create_rw_signal(format::load_currency()),
        recent_expenses: create_rw_signal(bootstrap.recent_expenses.clone()),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
        bootstrap,
    };

    provide_context(state);
}

impl GlobalState {
    /// Prepend a newly created expense to the listing.
    pub fn record_expense(&self, row: ExpenseRow) {
        self.recent_expenses.update(|rows| rows.insert(0, row));
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_parses_embedded_block() {
        let json = r#"{
            "category_breakdown": [{"name": "Food", "total": 120.5}],
            "monthly_total": 120.5,
            "recent_total": 60.0,
            "total_expenses": 3,
            "recent_expenses": [
                {"id": 1, "description": "Lunch", "amount": 12.0, "category": "Food", "date": "2024-05-01"}
            ],
            "categories": [{"id": 1, "name": "Food"}],
            "flashes": ["Expense added successfully!"]
        }"#;

        let data: BootstrapData = serde_json::from_str(json).unwrap();
        assert_eq!(data.category_breakdown.len(), 1);
        assert_eq!(data.category_breakdown[0].name, "Food");
        assert_eq!(data.total_expenses, 3);
        assert_eq!(data.recent_expenses[0].description, "Lunch");
        assert_eq!(data.categories[0].id, 1);
        assert_eq!(data.flashes.len(), 1);
    }

    #[test]
    fn bootstrap_missing_fields_default() {
        let data: BootstrapData = serde_json::from_str("{}").unwrap();
        assert!(data.category_breakdown.is_empty());
        assert_eq!(data.monthly_total, 0.0);
        assert!(data.categories.is_empty());
        assert!(data.flashes.is_empty());
    }
}
