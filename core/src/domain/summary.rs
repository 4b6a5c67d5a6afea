//! Budget overview presentation logic.
//!
//! The API computes the period summary (income, expense, balance and the
//! per-category breakdown); this module only turns those numbers into
//! display-ready strings and chart slices. It never re-aggregates the
//! transactions itself.

use log::debug;
use shared::{BudgetOverview, CategoryType, ChartSlice, Summary};

/// Format an amount as US-style currency: `$1,234.56`, negatives as
/// `-$1,234.56`. Always two decimals, thousands separated by commas.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    // Work in cents so rounding happens once, before splitting out the
    // fractional part.
    let cents = (amount.abs() * 100.0).round() as u64;
    let formatted = format!("${}.{:02}", group_thousands(cents / 100), cents % 100);
    if negative {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

/// Format a 0..=100 value as a percentage with one decimal, e.g. `42.5%`.
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Percentage of `value` relative to `total`, or 0 when the total is 0.
pub fn percentage_of(value: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    (value / total) * 100.0
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Builds the budget overview view model from a server summary.
#[derive(Debug, Clone, Default)]
pub struct SummaryService;

impl SummaryService {
    pub fn new() -> Self {
        Self
    }

    /// Format a server summary for the overview screen.
    ///
    /// When the summary carries no category data the screen shows the
    /// all-zeros empty state rather than whatever totals came back.
    pub fn budget_overview(&self, summary: &Summary) -> BudgetOverview {
        if summary.category_data.is_empty() {
            debug!("💰 SUMMARY: no category data for period, using empty overview");
            return Self::empty_overview();
        }

        let slices = self.expense_slices(summary);
        debug!(
            "💰 SUMMARY: overview with {} expense slices, balance {:.2}",
            slices.len(),
            summary.balance
        );

        BudgetOverview {
            formatted_balance: format_currency(summary.balance),
            formatted_income: format_currency(summary.income),
            formatted_expense: format_currency(summary.expense),
            raw_balance: summary.balance,
            raw_income: summary.income,
            raw_expense: summary.expense,
            has_chart_data: !slices.is_empty(),
            slices,
        }
    }

    /// The chart shows expense categories only, and only those with a
    /// positive amount. Percentages are relative to the charted total, so
    /// the slices always sum to 100 when any exist.
    fn expense_slices(&self, summary: &Summary) -> Vec<ChartSlice> {
        let charted: Vec<_> = summary
            .category_data
            .iter()
            .filter(|cat| cat.category_type == CategoryType::Expense && cat.amount > 0.0)
            .collect();

        let total: f64 = charted.iter().map(|cat| cat.amount).sum();

        charted
            .into_iter()
            .map(|cat| {
                let percentage = percentage_of(cat.amount, total);
                ChartSlice {
                    name: cat.name.clone(),
                    color: cat.color.clone(),
                    formatted_amount: format_currency(cat.amount),
                    raw_amount: cat.amount,
                    percentage,
                    formatted_percentage: format_percentage(percentage),
                }
            })
            .collect()
    }

    fn empty_overview() -> BudgetOverview {
        BudgetOverview {
            formatted_balance: format_currency(0.0),
            formatted_income: format_currency(0.0),
            formatted_expense: format_currency(0.0),
            raw_balance: 0.0,
            raw_income: 0.0,
            raw_expense: 0.0,
            slices: Vec::new(),
            has_chart_data: false,
        }
    }
}
