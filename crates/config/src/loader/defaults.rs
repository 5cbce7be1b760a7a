//! Default values that depend on the calendar.
//!
//! The expression defaults to the previous calendar day so a nightly job
//! archives the indices written during the day that just ended.

use chrono::{Days, NaiveDate};

use crate::constants::DEFAULT_EXPRESSION_DATE_FORMAT;

/// Expression used when none is configured: the day before `today`, as `YYYY-MM-DD`.
///
/// `today` is passed in rather than read from the clock so callers decide
/// which timezone "today" means.
pub fn default_expression(today: NaiveDate) -> String {
    today
        .checked_sub_days(Days::new(1))
        .unwrap_or(today)
        .format(DEFAULT_EXPRESSION_DATE_FORMAT)
        .to_string()
}
