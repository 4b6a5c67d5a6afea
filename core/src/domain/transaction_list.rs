//! Transaction list presentation logic.
//!
//! Turns the raw transactions returned inside a period summary into the rows
//! the list screen renders: short display date, description with a category
//! fallback, and a signed currency amount whose sign comes from the category
//! type, not from the stored number.

use log::debug;
use shared::{AmountType, CategoryType, FormattedTransaction, Transaction};

use crate::domain::date_range::month_abbrev;
use crate::domain::summary::format_currency;

/// Formats transactions for the list screen.
#[derive(Debug, Clone, Default)]
pub struct TransactionListService;

impl TransactionListService {
    pub fn new() -> Self {
        Self
    }

    /// Format a period's transactions for display, most recent first.
    pub fn format_transactions(&self, transactions: &[Transaction]) -> Vec<FormattedTransaction> {
        let mut rows: Vec<FormattedTransaction> = transactions
            .iter()
            .map(|tx| self.format_transaction(tx))
            .collect();

        // ISO date strings compare chronologically; newest first, with the
        // id as tiebreak for same-day rows.
        rows.sort_by(|a, b| b.raw_date.cmp(&a.raw_date).then(b.id.cmp(&a.id)));
        debug!("🧾 TRANSACTIONS: formatted {} rows", rows.len());
        rows
    }

    /// Format a single transaction row.
    pub fn format_transaction(&self, transaction: &Transaction) -> FormattedTransaction {
        let amount_type = self.classify(transaction);
        FormattedTransaction {
            id: transaction.id,
            formatted_date: self.format_display_date(&transaction.date),
            description: self.display_description(transaction),
            formatted_amount: self.format_amount(transaction.amount, amount_type),
            amount_type,
            raw_amount: transaction.amount,
            raw_date: transaction.date.clone(),
        }
    }

    /// Short display date, e.g. "Mar 11, 2024". Falls back to the raw string
    /// when the date does not parse.
    pub fn format_display_date(&self, date_str: &str) -> String {
        match parse_date(date_str) {
            Some((year, month, day)) => format!("{} {}, {}", month_abbrev(month), day, year),
            None => date_str.to_string(),
        }
    }

    /// Signed currency string: income rows get a `+` prefix, expense rows a
    /// `-` prefix, zero amounts neither.
    pub fn format_amount(&self, amount: f64, amount_type: AmountType) -> String {
        let formatted = format_currency(amount.abs());
        match amount_type {
            AmountType::Positive => format!("+{}", formatted),
            AmountType::Negative => format!("-{}", formatted),
            AmountType::Zero => formatted,
        }
    }

    /// Sign classification for the row. The joined category decides; when the
    /// API did not join one, the stored amount's sign is all there is.
    pub fn classify(&self, transaction: &Transaction) -> AmountType {
        if transaction.amount == 0.0 {
            return AmountType::Zero;
        }
        match transaction.category.as_ref().map(|c| c.category_type) {
            Some(CategoryType::Income) => AmountType::Positive,
            Some(CategoryType::Expense) => AmountType::Negative,
            None => {
                if transaction.amount > 0.0 {
                    AmountType::Positive
                } else {
                    AmountType::Negative
                }
            }
        }
    }

    /// The row caption: the transaction's description, or the category name
    /// when no description was entered.
    fn display_description(&self, transaction: &Transaction) -> String {
        if let Some(description) = &transaction.description {
            if !description.trim().is_empty() {
                return description.clone();
            }
        }
        transaction
            .category
            .as_ref()
            .map(|c| c.name.clone())
            .unwrap_or_default()
    }
}

/// Extract (year, month, day) from an RFC 3339 or plain `YYYY-MM-DD` date
/// string.
fn parse_date(date_str: &str) -> Option<(u32, u32, u32)> {
    let date_part = date_str.split('T').next()?;
    let parts: Vec<&str> = date_part.split('-').collect();
    if parts.len() != 3 {
        return None;
    }
    match (
        parts[0].parse::<u32>(),
        parts[1].parse::<u32>(),
        parts[2].parse::<u32>(),
    ) {
        (Ok(year), Ok(month), Ok(day)) => Some((year, month, day)),
        _ => None,
    }
}
