//! Shared data types for the Frugify client.
//!
//! These are the wire DTOs exchanged with the remote finance API plus the
//! formatted display structures produced by the domain services. The API
//! speaks camelCase JSON, so every wire type carries the serde renames needed
//! to keep the Rust field names idiomatic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The granularity of the period currently being browsed.
///
/// Serialized as the lowercase strings the API expects in its `timeRange`
/// parameter ("day", "week", "month", "year").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    Day,
    Week,
    Month,
    Year,
}

impl TimeRange {
    /// All ranges in selector order (Day | Week | Month | Year).
    pub const ALL: [TimeRange; 4] = [
        TimeRange::Day,
        TimeRange::Week,
        TimeRange::Month,
        TimeRange::Year,
    ];

    /// Wire representation, matching the serde serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Day => "day",
            TimeRange::Week => "week",
            TimeRange::Month => "month",
            TimeRange::Year => "year",
        }
    }

    /// Caption used by the range selector UI.
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Day => "Day",
            TimeRange::Week => "Week",
            TimeRange::Month => "Month",
            TimeRange::Year => "Year",
        }
    }
}

impl Default for TimeRange {
    /// The app opens on the month view.
    fn default() -> Self {
        TimeRange::Month
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a category contributes to income or expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryType {
    Income,
    Expense,
}

impl CategoryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryType::Income => "income",
            CategoryType::Expense => "expense",
        }
    }
}

/// A transaction category as served by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: CategoryType,
    /// Icon name understood by the presentation layer.
    pub icon: String,
    /// Display color as a hex string (e.g. "#F44336").
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

/// A single transaction as served by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    /// Always positive; the category type determines the sign for display.
    pub amount: f64,
    /// Transaction date, either RFC 3339 or a plain `YYYY-MM-DD` date.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category_id: i64,
    /// Populated when the API joins the category onto the transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// Per-category aggregate inside a [`Summary`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: CategoryType,
    pub icon: String,
    pub color: String,
    pub amount: f64,
}

/// Server-computed aggregation for a date range: totals, per-category
/// breakdown and the matching transactions. The client renders this as-is
/// and never re-derives the numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
    pub category_data: Vec<CategorySummary>,
    pub transactions: Vec<Transaction>,
}

/// Date-range filter sent to the API when requesting transactions or a
/// summary.
///
/// Format contract: both bounds are calendar dates in zero-padded
/// `YYYY-MM-DD` form, Gregorian, no time component, no timezone suffix.
/// A mismatched format here would silently corrupt every downstream query
/// range, so the strings are produced exclusively by the period navigator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeQuery {
    pub start_date: String,
    pub end_date: String,
}

impl DateRangeQuery {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// Render the query-string suffix appended to API endpoints, e.g.
    /// `startDate=2024-03-01&endDate=2024-03-31`.
    pub fn to_query_string(&self) -> String {
        format!("startDate={}&endDate={}", self.start_date, self.end_date)
    }
}

/// The inclusive start/end instants of the calendar unit containing the
/// reference date. Derived, never stored: always recomputed from the
/// navigator's current state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodWindow {
    pub start: chrono::NaiveDateTime,
    pub end: chrono::NaiveDateTime,
}

/// Sign classification of an amount for styling purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmountType {
    Positive,
    Negative,
    Zero,
}

/// A transaction row formatted for list display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedTransaction {
    pub id: i64,
    /// Short display date, e.g. "Mar 11, 2024".
    pub formatted_date: String,
    pub description: String,
    /// Signed currency string, e.g. "+$10.00" or "-$5.00".
    pub formatted_amount: String,
    pub amount_type: AmountType,
    pub raw_amount: f64,
    pub raw_date: String,
}

/// One slice of the expense breakdown chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub name: String,
    pub color: String,
    pub formatted_amount: String,
    pub raw_amount: f64,
    /// Share of the expense total, 0..=100.
    pub percentage: f64,
    /// e.g. "42.5%"
    pub formatted_percentage: String,
}

/// Formatted budget overview: the balance/income/expense headline plus the
/// expense breakdown slices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetOverview {
    pub formatted_balance: String,
    pub formatted_income: String,
    pub formatted_expense: String,
    pub raw_balance: f64,
    pub raw_income: f64,
    pub raw_expense: f64,
    pub slices: Vec<ChartSlice>,
    /// False when there is nothing to chart for the period.
    pub has_chart_data: bool,
}
