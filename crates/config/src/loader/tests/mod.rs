//! Tests for the configuration loader builder.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.

use std::sync::Mutex;

use chrono::NaiveDate;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Fixed "today" so expression defaults are deterministic.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2016, 3, 13).unwrap()
}
