//! Property-based tests for configuration building.
//!
//! Test coverage:
//! - Default expression: always the previous day, always `YYYY-MM-DD`
//! - URI normalization: trailing slashes never survive, host and port do

use archive_config::{ConfigLoader, default_expression};
use chrono::{Days, NaiveDate};
use proptest::prelude::*;

/// Strategy for generating valid calendar dates.
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1971i32..=2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// Strategy for generating valid cluster URIs.
fn uri_strategy() -> impl Strategy<Value = String> {
    let scheme = prop_oneof![Just("http"), Just("https")];
    let host = prop_oneof![
        Just("localhost"),
        Just("es.local"),
        Just("search-01.internal"),
        Just("10.0.0.12"),
    ];
    (scheme, host, 1024u16..=65535u16).prop_map(|(s, h, p)| format!("{s}://{h}:{p}"))
}

proptest! {
    #[test]
    fn default_expression_is_previous_day(today in date_strategy()) {
        let expression = default_expression(today);
        let parsed = NaiveDate::parse_from_str(&expression, "%Y-%m-%d").unwrap();

        prop_assert_eq!(expression.len(), 10);
        prop_assert_eq!(parsed.checked_add_days(Days::new(1)), Some(today));
    }

    #[test]
    fn uri_trailing_slashes_are_stripped(uri in uri_strategy(), slashes in 0usize..4) {
        let raw = format!("{uri}{}", "/".repeat(slashes));
        let config = ConfigLoader::new()
            .with_repository("backups".to_string())
            .with_uri(raw)
            .build_for_date(NaiveDate::from_ymd_opt(2016, 3, 13).unwrap())
            .unwrap();

        prop_assert_eq!(config.uri, uri);
    }
}
