//! Period navigation state for the Frugify client.
//!
//! Every screen that shows money for "a period" (the transaction list, the
//! budget overview) is scoped by the same two pieces of state: a reference
//! date and a granularity. `PeriodNavigator` owns that state explicitly —
//! the screens receive a cloned handle instead of reaching into ambient
//! app-wide context — and derives everything else from it on demand:
//!
//! - the inclusive [start, end] window of the calendar unit containing the
//!   reference date
//! - the `YYYY-MM-DD` start/end keys for API date-range queries
//! - the human-readable period label shown between the prev/next arrows
//!
//! Window, bounds and label are recomputed on every call; nothing is cached,
//! so a query after any navigation always reflects the new state.

use std::sync::{Arc, Mutex};

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDateTime};
use log::{debug, info};
use shared::{DateRangeQuery, PeriodWindow, TimeRange};

use crate::domain::date_range::{self, month_abbrev, month_name};

/// The navigator's two state fields. Kept in memory only; recreated with the
/// owning session.
#[derive(Debug, Clone, PartialEq)]
struct PeriodFocus {
    reference_date: NaiveDateTime,
    time_range: TimeRange,
}

/// Navigation over day/week/month/year periods.
///
/// Cloning the navigator clones the handle, not the state: all clones see
/// the same focus, which is how multiple screens stay on the same period.
/// Independent navigators (separate `new()` calls) share nothing.
#[derive(Clone)]
pub struct PeriodNavigator {
    focus: Arc<Mutex<PeriodFocus>>,
}

impl PeriodNavigator {
    /// Create a navigator anchored to the current moment, on the month view.
    pub fn new() -> Self {
        Self::with_state(Local::now().naive_local(), TimeRange::default())
    }

    /// Create a navigator with an explicit reference date and range, e.g.
    /// when a screen restores its previous state.
    pub fn with_state(reference_date: NaiveDateTime, time_range: TimeRange) -> Self {
        Self {
            focus: Arc::new(Mutex::new(PeriodFocus {
                reference_date,
                time_range,
            })),
        }
    }

    /// Current reference date.
    pub fn reference_date(&self) -> NaiveDateTime {
        self.focus.lock().unwrap().reference_date
    }

    /// Current granularity.
    pub fn time_range(&self) -> TimeRange {
        self.focus.lock().unwrap().time_range
    }

    /// Switch granularity. The reference date is left untouched, so e.g.
    /// switching Month -> Day shows the day the month view was anchored on.
    pub fn set_time_range(&self, time_range: TimeRange) {
        let mut focus = self.focus.lock().unwrap();
        focus.time_range = time_range;
        info!("📅 PERIOD: time range set to {}", time_range);
    }

    /// Move back by exactly one unit of the current granularity.
    ///
    /// Month and year steps use calendar-aware subtraction with clamping at
    /// month ends (Mar 31 back one month is Feb 29/28); see
    /// [`date_range`](crate::domain::date_range) for the pinned-down policy.
    pub fn previous_period(&self) -> Result<NaiveDateTime> {
        let mut focus = self.focus.lock().unwrap();
        let stepped = date_range::sub_unit(focus.time_range, focus.reference_date)?;
        focus.reference_date = stepped;
        info!(
            "📅 PERIOD: stepped back one {} to {}",
            focus.time_range, stepped
        );
        Ok(stepped)
    }

    /// Move forward by exactly one unit of the current granularity.
    pub fn next_period(&self) -> Result<NaiveDateTime> {
        let mut focus = self.focus.lock().unwrap();
        let stepped = date_range::add_unit(focus.time_range, focus.reference_date)?;
        focus.reference_date = stepped;
        info!(
            "📅 PERIOD: stepped forward one {} to {}",
            focus.time_range, stepped
        );
        Ok(stepped)
    }

    /// Re-anchor on the current moment. Granularity is unchanged.
    pub fn reset_to_today(&self) {
        let now = Local::now().naive_local();
        let mut focus = self.focus.lock().unwrap();
        focus.reference_date = now;
        info!("📅 PERIOD: reset to today ({})", now);
    }

    /// Anchor on an explicit date, e.g. one picked from the calendar modal.
    pub fn anchor_to(&self, reference_date: NaiveDateTime) {
        let mut focus = self.focus.lock().unwrap();
        focus.reference_date = reference_date;
        info!("📅 PERIOD: anchored to {}", reference_date);
    }

    /// The inclusive window of the calendar unit containing the reference
    /// date. Pure derivation; calling it never mutates the navigator.
    pub fn window(&self) -> PeriodWindow {
        let focus = self.focus.lock().unwrap().clone();
        let w = date_range::window(focus.time_range, focus.reference_date);
        debug!(
            "📅 PERIOD: {} window for {} is [{}, {}]",
            focus.time_range, focus.reference_date, w.start, w.end
        );
        w
    }

    /// Window boundaries as `YYYY-MM-DD` keys for the API's
    /// `startDate`/`endDate` filter parameters.
    pub fn query_bounds(&self) -> DateRangeQuery {
        let w = self.window();
        DateRangeQuery::new(date_range::query_key(w.start), date_range::query_key(w.end))
    }

    /// Human-readable label for the current period:
    ///
    /// - Day: "September 5, 2025"
    /// - Week: "Sep 1 - Sep 7, 2025"
    /// - Month: "September 2025"
    /// - Year: "2025"
    pub fn period_label(&self) -> String {
        let focus = self.focus.lock().unwrap().clone();
        let date = focus.reference_date.date();
        match focus.time_range {
            TimeRange::Day => {
                format!("{} {}, {}", month_name(date.month()), date.day(), date.year())
            }
            TimeRange::Week => {
                let w = date_range::window(TimeRange::Week, focus.reference_date);
                let (start, end) = (w.start.date(), w.end.date());
                format!(
                    "{} {} - {} {}, {}",
                    month_abbrev(start.month()),
                    start.day(),
                    month_abbrev(end.month()),
                    end.day(),
                    end.year()
                )
            }
            TimeRange::Month => format!("{} {}", month_name(date.month()), date.year()),
            TimeRange::Year => format!("{}", date.year()),
        }
    }
}

impl Default for PeriodNavigator {
    fn default() -> Self {
        Self::new()
    }
}
