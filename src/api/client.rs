//! HTTP API Client
//!
//! Functions for communicating with the expense-tracker REST API.

use gloo_net::http::Request;

use crate::state::global::{ExpenseRow, MonthlyPoint, SubcategoryOption};

/// Default API base URL: same origin as the host page
pub const DEFAULT_API_BASE: &str = "";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("fintrack_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("fintrack_api_url", url);
        }
    }
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
struct RangeTotalResponse {
    total: f64,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

// ============ Custom Range ============

/// Date-range selection for the custom-range total
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeSelection {
    /// Neither date picked: all-time aggregate
    AllTime,
    /// Exactly one date picked: rejected before any request is issued
    Incomplete,
    /// Both dates picked, echoed verbatim as query parameters
    Bounded { from: String, to: String },
}

/// Classify the two optional date inputs per the custom-range contract.
pub fn classify_range(date_from: &str, date_to: &str) -> RangeSelection {
    match (date_from.is_empty(), date_to.is_empty()) {
        (true, true) => RangeSelection::AllTime,
        (false, false) => RangeSelection::Bounded {
            from: date_from.to_string(),
            to: date_to.to_string(),
        },
        _ => RangeSelection::Incomplete,
    }
}

/// Query string for a range selection; `None` when no request may be issued.
pub fn range_query(selection: &RangeSelection) -> Option<String> {
    match selection {
        RangeSelection::AllTime => Some(String::new()),
        RangeSelection::Incomplete => None,
        RangeSelection::Bounded { from, to } => {
            Some(format!("?date_from={}&date_to={}", from, to))
        }
    }
}

// ============ API Functions ============

/// Fetch the monthly trend series
pub async fn fetch_monthly_trend() -> Result<Vec<MonthlyPoint>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/expenses/monthly-trend", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Unknown error".to_string(),
            code: None,
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the expense total for a range selection. `Incomplete` selections
/// never reach the network; callers reject them before calling here.
pub async fn fetch_custom_range_total(selection: &RangeSelection) -> Result<f64, String> {
    let query =
        range_query(selection).ok_or_else(|| "Incomplete date range".to_string())?;

    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/expenses/custom-range{}", api_base, query))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Unknown error".to_string(),
            code: None,
        });
        return Err(error.error);
    }

    let result: RangeTotalResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.total)
}

/// Fetch the subcategories of a category
pub async fn fetch_subcategories(category_id: u32) -> Result<Vec<SubcategoryOption>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!(
        "{}/categories/{}/subcategories/json",
        api_base, category_id
    ))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Unknown error".to_string(),
            code: None,
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Payload for creating an expense
#[derive(Debug, serde::Serialize)]
pub struct NewExpense {
    pub description: String,
    pub amount: f64,
    pub date: String,
    pub category_id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory_id: Option<u32>,
}

/// Create a new expense
pub async fn create_expense(expense: &NewExpense) -> Result<ExpenseRow, String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/api/expenses", api_base))
        .json(expense)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Unknown error".to_string(),
            code: None,
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Probe the API with the cheapest aggregate call
pub async fn check_connection() -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/expenses/custom-range", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("API is not reachable".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_both_absent_is_all_time() {
        let selection = classify_range("", "");
        assert_eq!(selection, RangeSelection::AllTime);
        assert_eq!(range_query(&selection), Some(String::new()));
    }

    #[test]
    fn range_one_sided_is_rejected() {
        assert_eq!(classify_range("2024-01-01", ""), RangeSelection::Incomplete);
        assert_eq!(classify_range("", "2024-01-31"), RangeSelection::Incomplete);
        assert_eq!(range_query(&RangeSelection::Incomplete), None);
    }

    #[test]
    fn range_bounded_echoes_both_dates() {
        let selection = classify_range("2024-01-01", "2024-01-31");
        assert_eq!(
            selection,
            RangeSelection::Bounded {
                from: "2024-01-01".to_string(),
                to: "2024-01-31".to_string(),
            }
        );
        assert_eq!(
            range_query(&selection),
            Some("?date_from=2024-01-01&date_to=2024-01-31".to_string())
        );
    }
}
