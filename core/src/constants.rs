//! Fixed model constants and reference tables.
//!
//! Working-time figures drive every rate and capacity calculation, so
//! they live here in one place. The tables back input validation and
//! display; none of them participate in arithmetic.

/// Standard working hours per week, used for rate derivation.
pub const WORKING_HOURS_PER_WEEK: f64 = 40.0;

/// Calendar weeks per year, used to annualize weekly figures.
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Vacation weeks subtracted when sizing freed capacity.
pub const VACATION_WEEKS: f64 = 4.0;

/// Effective working weeks per year (52 - 4). FTE math uses this, not
/// the calendar year: freed hours can only be redeployed into weeks
/// someone is actually at work.
pub const WORKING_WEEKS_PER_YEAR: f64 = WEEKS_PER_YEAR - VACATION_WEEKS;

/// Floor applied to ratio denominators (ROI, payback). Keeps zero-cost
/// records producing large finite values instead of infinities, which
/// would not survive JSON serialization.
pub const COST_GUARD_EPSILON: f64 = 1e-9;

/// Payback values beyond this many months render as "100+ months".
pub const PAYBACK_DISPLAY_CAP_MONTHS: f64 = 100.0;

/// Departments an input record may claim. Validation rejects anything
/// not in this list.
pub const DEPARTMENTS: [&str; 9] = [
    "HR",
    "Finance",
    "Operations",
    "Sales",
    "Marketing",
    "IT",
    "Customer Support",
    "Legal",
    "Procurement",
];

/// Industry labels offered by the intake surfaces. Free-text industries
/// are accepted as long as they are non-empty; this table is advisory.
pub const INDUSTRIES: [&str; 9] = [
    "Technology",
    "Healthcare",
    "Financial Services",
    "Manufacturing",
    "Retail",
    "Education",
    "Government",
    "Non-profit",
    "Other",
];

/// A process-category tag: stable value plus display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub value: &'static str,
    pub label: &'static str,
}

pub const CATEGORIES: [CategoryInfo; 6] = [
    CategoryInfo { value: "repetitive", label: "Repetitive Tasks" },
    CategoryInfo { value: "reporting", label: "Reporting" },
    CategoryInfo { value: "data-entry", label: "Data Entry" },
    CategoryInfo { value: "approvals", label: "Approvals" },
    CategoryInfo { value: "analysis", label: "Analysis" },
    CategoryInfo { value: "communication", label: "Communication" },
];

/// A supported display currency. No conversion happens anywhere: the
/// code selects a symbol and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

pub const CURRENCIES: [CurrencyInfo; 4] = [
    CurrencyInfo { code: "USD", symbol: "$", name: "US Dollar" },
    CurrencyInfo { code: "EUR", symbol: "€", name: "Euro" },
    CurrencyInfo { code: "PLN", symbol: "zł", name: "Polish Złoty" },
    CurrencyInfo { code: "THB", symbol: "฿", name: "Thai Baht" },
];

/// Symbol for a currency code, falling back to "$" for unknown codes.
pub fn currency_symbol(code: &str) -> &'static str {
    CURRENCIES
        .iter()
        .find(|c| c.code == code)
        .map(|c| c.symbol)
        .unwrap_or("$")
}

/// Display label for a category value, falling back to the raw value.
pub fn category_label(value: &str) -> &str {
    CATEGORIES
        .iter()
        .find(|c| c.value == value)
        .map(|c| c.label)
        .unwrap_or(value)
}
