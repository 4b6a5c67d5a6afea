//! Core domain logic for the Frugify personal-finance client.
//!
//! The remote API owns the data and the aggregation; this crate owns the
//! client-side domain state and presentation logic that the screens consume:
//!
//! - period navigation (`domain::period_navigator`) — the reference date and
//!   granularity that every data query is scoped to
//! - calendar arithmetic (`domain::date_range`) — window boundaries and the
//!   `YYYY-MM-DD` query keys
//! - budget overview and transaction list view models (`domain::summary`,
//!   `domain::transaction_list`)

pub mod domain;
