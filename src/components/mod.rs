//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod alert;
pub mod chart;
pub mod confirm;
pub mod expense_form;
pub mod nav;
pub mod summary_card;
pub mod toast;
pub mod tooltip;

pub use alert::FlashAlerts;
pub use chart::{CategoryChart, TrendChart};
pub use confirm::DeleteLink;
pub use expense_form::ExpenseForm;
pub use nav::Nav;
pub use summary_card::SummaryCard;
pub use toast::Toast;
