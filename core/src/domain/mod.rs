//! Domain services for the Frugify client.
//!
//! Each service follows the same pattern: a cheaply cloneable struct with
//! pure methods that map wire DTOs and navigator state to display-ready
//! values. The screens hold the services; no service holds a screen.

pub mod date_range;
pub mod period_navigator;
pub mod summary;
pub mod transaction_list;

pub use date_range::DateRangeError;
pub use period_navigator::PeriodNavigator;
pub use summary::SummaryService;
pub use transaction_list::TransactionListService;
