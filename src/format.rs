//! Currency Formatting
//!
//! Every amount on the dashboard renders through a selectable currency
//! strategy: a symbol plus a digit-grouping scheme. Also hosts the blur
//! normalization applied to amount inputs.

/// Local storage key for the saved currency strategy
const CURRENCY_STORAGE_KEY: &str = "fintrack_currency";

/// Currency formatting strategy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Currency {
    /// US dollar, western grouping: $1,234.56
    #[default]
    Usd,
    /// Indian rupee, lakh/crore grouping: ₹1,23,456.78
    Inr,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Inr => "INR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Inr => "₹",
        }
    }

    pub fn from_code(code: &str) -> Option<Currency> {
        match code {
            "USD" => Some(Currency::Usd),
            "INR" => Some(Currency::Inr),
            _ => None,
        }
    }

    /// Format an amount with two decimals and this currency's grouping.
    pub fn format(&self, amount: f64) -> String {
        let fixed = format!("{:.2}", amount.abs());
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        let grouped = match self {
            Currency::Usd => group_western(int_part),
            Currency::Inr => group_indian(int_part),
        };

        let sign = if amount < 0.0 { "-" } else { "" };
        format!("{}{}{}.{}", sign, self.symbol(), grouped, frac_part)
    }
}

/// Thousands separators every three digits.
fn group_western(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Indian grouping: the last three digits together, the rest in pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let head_chars: Vec<char> = head.chars().collect();

    let mut groups = Vec::new();
    let mut end = head_chars.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(head_chars[start..end].iter().collect::<String>());
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Normalize an amount field to two decimals on blur. Returns `None` when
/// the value does not parse as a number, in which case the field is left
/// untouched.
pub fn normalize_amount(raw: &str) -> Option<String> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| format!("{:.2}", value))
}

/// Read the saved currency strategy from local storage, defaulting to USD.
pub fn load_currency() -> Currency {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(code)) = storage.get_item(CURRENCY_STORAGE_KEY) {
                if let Some(currency) = Currency::from_code(&code) {
                    return currency;
                }
            }
        }
    }
    Currency::default()
}

/// Persist the currency strategy in local storage.
pub fn store_currency(currency: Currency) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(CURRENCY_STORAGE_KEY, currency.code());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_western_grouping() {
        assert_eq!(Currency::Usd.format(1234.56), "$1,234.56");
        assert_eq!(Currency::Usd.format(0.0), "$0.00");
        assert_eq!(Currency::Usd.format(999.9), "$999.90");
        assert_eq!(Currency::Usd.format(1_000_000.0), "$1,000,000.00");
    }

    #[test]
    fn inr_lakh_crore_grouping() {
        assert_eq!(Currency::Inr.format(123456.78), "₹1,23,456.78");
        assert_eq!(Currency::Inr.format(1234.5), "₹1,234.50");
        assert_eq!(Currency::Inr.format(12345678.9), "₹1,23,45,678.90");
        assert_eq!(Currency::Inr.format(999.0), "₹999.00");
    }

    #[test]
    fn normalize_pads_to_two_decimals() {
        assert_eq!(normalize_amount("3"), Some("3.00".to_string()));
        assert_eq!(normalize_amount("12.5"), Some("12.50".to_string()));
        assert_eq!(normalize_amount(" 7.4 "), Some("7.40".to_string()));
    }

    #[test]
    fn normalize_leaves_non_numeric_untouched() {
        assert_eq!(normalize_amount("abc"), None);
        assert_eq!(normalize_amount(""), None);
    }

    #[test]
    fn currency_code_round_trip() {
        assert_eq!(Currency::from_code(Currency::Usd.code()), Some(Currency::Usd));
        assert_eq!(Currency::from_code(Currency::Inr.code()), Some(Currency::Inr));
        assert_eq!(Currency::from_code("GBP"), None);
    }
}
