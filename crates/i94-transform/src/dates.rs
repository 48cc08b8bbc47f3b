//! Date reconciliation for the immigration extracts.
//!
//! The source carries two competing date encodings. Arrival and departure
//! dates are numeric day-offsets from 1960-01-01; a missing, non-numeric,
//! or out-of-range offset reconciles to the fixed sentinel 1900-01-01 so
//! downstream consumers never see a null arrival or departure. The two
//! remaining date fields are calendar strings with explicit formats
//! (`dtadfile` as `%Y%m%d`, `dtaddto` as `%m%d%Y`) and null on parse
//! failure; the sentinel is exclusive to offset reconciliation.
//!
//! The scalar API returns [`ReconciledDate`] so a fallback is a named
//! variant rather than an implicit catch-all: tests can tell a real
//! 1900-01-01 observation apart from an unparseable offset.

use chrono::{NaiveDate, TimeDelta};
use polars::prelude::{DataType, Expr, StrptimeOptions, col, lit};

/// Format of the `dtadfile` field (`yyyyMMdd`).
pub const FILE_DATE_FORMAT: &str = "%Y%m%d";
/// Format of the `dtaddto` field (`MMddyyyy`).
pub const ADMITTED_UNTIL_FORMAT: &str = "%m%d%Y";

/// 1960-01-01 expressed as days relative to the Unix epoch.
const EPOCH_DAYS_FROM_UNIX: i32 = -3_653;
/// 1900-01-01 expressed as days relative to the Unix epoch.
const SENTINEL_DAYS_FROM_UNIX: i32 = -25_567;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("hardcoded date is valid")
}

/// Epoch the numeric day-offsets count from.
pub fn day_offset_epoch() -> NaiveDate {
    ymd(1960, 1, 1)
}

/// Sentinel substituted when offset reconciliation fails.
pub fn sentinel_date() -> NaiveDate {
    ymd(1900, 1, 1)
}

/// Outcome of reconciling one day-offset value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconciledDate {
    /// The offset was numeric and in range.
    Parsed(NaiveDate),
    /// The value was missing, non-numeric, or out of range.
    Unparseable,
}

impl ReconciledDate {
    /// The date a consumer sees: the parsed date, or the sentinel.
    pub fn resolve(self) -> NaiveDate {
        match self {
            Self::Parsed(date) => date,
            Self::Unparseable => sentinel_date(),
        }
    }

    /// True when the resolved date is the fallback rather than a real date.
    pub fn is_fallback(self) -> bool {
        matches!(self, Self::Unparseable)
    }
}

/// Reconciles a numeric day-offset to a calendar date.
///
/// Fractional offsets truncate toward zero, matching the whole-day
/// granularity of the source.
pub fn reconcile_day_offset(raw: Option<f64>) -> ReconciledDate {
    let Some(value) = raw else {
        return ReconciledDate::Unparseable;
    };
    if !value.is_finite() {
        return ReconciledDate::Unparseable;
    }
    let days = value.trunc();
    if days < f64::from(i32::MIN) || days > f64::from(i32::MAX) {
        return ReconciledDate::Unparseable;
    }

    TimeDelta::try_days(days as i64)
        .and_then(|delta| day_offset_epoch().checked_add_signed(delta))
        .map_or(ReconciledDate::Unparseable, ReconciledDate::Parsed)
}

/// Reconciles a day-offset delivered as text (e.g. from a CSV extract).
pub fn reconcile_day_offset_str(raw: Option<&str>) -> ReconciledDate {
    let parsed = raw.and_then(|value| value.trim().parse::<f64>().ok());
    match (raw, parsed) {
        (Some(_), None) => ReconciledDate::Unparseable,
        (_, value) => reconcile_day_offset(value),
    }
}

/// Lazy-expression form of [`reconcile_day_offset`], applied to one column.
///
/// The column is coerced to a float so numeric and text extracts behave the
/// same; anything that fails the coercion, the range check, or is null ends
/// up as the sentinel after `fill_null`.
pub fn day_offset_to_date_expr(name: &str) -> Expr {
    (col(name).cast(DataType::Float64) + lit(f64::from(EPOCH_DAYS_FROM_UNIX)))
        .cast(DataType::Int32)
        .cast(DataType::Date)
        .fill_null(lit(SENTINEL_DAYS_FROM_UNIX).cast(DataType::Date))
        .alias(name)
}

/// Parses a string-encoded date column against an explicit format.
///
/// Lenient: values that do not match the format become null. Numeric
/// columns are stringified first so an extract that inferred `dtadfile`
/// as an integer still parses.
pub fn string_to_date_expr(name: &str, format: &str) -> Expr {
    col(name)
        .cast(DataType::String)
        .str()
        .to_date(StrptimeOptions {
            format: Some(format.into()),
            strict: false,
            ..Default::default()
        })
        .alias(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{AnyValue, IntoLazy, df};
    use proptest::prelude::*;

    fn date_days(df: &polars::prelude::DataFrame, column: &str, row: usize) -> Option<i32> {
        match df.column(column).unwrap().get(row).unwrap() {
            AnyValue::Date(days) => Some(days),
            AnyValue::Null => None,
            other => panic!("expected a date in {column}[{row}], got {other:?}"),
        }
    }

    #[test]
    fn day_constants_agree_with_chrono() {
        let unix = ymd(1970, 1, 1);
        assert_eq!(
            (day_offset_epoch() - unix).num_days(),
            i64::from(EPOCH_DAYS_FROM_UNIX)
        );
        assert_eq!(
            (sentinel_date() - unix).num_days(),
            i64::from(SENTINEL_DAYS_FROM_UNIX)
        );
    }

    #[test]
    fn offset_zero_is_the_epoch() {
        assert_eq!(
            reconcile_day_offset(Some(0.0)),
            ReconciledDate::Parsed(ymd(1960, 1, 1))
        );
    }

    #[test]
    fn offset_crosses_the_leap_year() {
        // 1960 is a leap year, so 366 days land on 1961-01-01.
        assert_eq!(
            reconcile_day_offset(Some(366.0)),
            ReconciledDate::Parsed(ymd(1961, 1, 1))
        );
    }

    #[test]
    fn offset_20820_is_2017() {
        assert_eq!(
            reconcile_day_offset(Some(20820.0)),
            ReconciledDate::Parsed(ymd(2017, 1, 1))
        );
    }

    #[test]
    fn fractional_offsets_truncate() {
        assert_eq!(
            reconcile_day_offset(Some(1.9)),
            ReconciledDate::Parsed(ymd(1960, 1, 2))
        );
    }

    #[test]
    fn missing_and_non_finite_offsets_fall_back() {
        assert_eq!(reconcile_day_offset(None), ReconciledDate::Unparseable);
        assert_eq!(
            reconcile_day_offset(Some(f64::NAN)),
            ReconciledDate::Unparseable
        );
        assert_eq!(
            reconcile_day_offset(Some(f64::INFINITY)),
            ReconciledDate::Unparseable
        );
        assert_eq!(reconcile_day_offset(None).resolve(), sentinel_date());
    }

    #[test]
    fn textual_offsets_parse_or_fall_back() {
        assert_eq!(
            reconcile_day_offset_str(Some("20820")),
            ReconciledDate::Parsed(ymd(2017, 1, 1))
        );
        assert_eq!(
            reconcile_day_offset_str(Some("N/A")),
            ReconciledDate::Unparseable
        );
        assert_eq!(reconcile_day_offset_str(None), ReconciledDate::Unparseable);
        assert!(reconcile_day_offset_str(Some("N/A")).is_fallback());
        assert_eq!(
            reconcile_day_offset_str(Some("N/A")).resolve(),
            sentinel_date()
        );
    }

    #[test]
    fn expr_matches_scalar_reconciliation() {
        let df = df!("arrdate" => ["0", "366", "20820", "N/A", "", "-1"]).unwrap();
        let out = df
            .lazy()
            .select([day_offset_to_date_expr("arrdate")])
            .collect()
            .unwrap();

        let inputs = ["0", "366", "20820", "N/A", "", "-1"];
        for (row, input) in inputs.iter().enumerate() {
            let expected = reconcile_day_offset_str(Some(input)).resolve();
            let expected_days = (expected - ymd(1970, 1, 1)).num_days() as i32;
            assert_eq!(
                date_days(&out, "arrdate", row),
                Some(expected_days),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn string_dates_parse_against_their_formats() {
        let df = df!(
            "dtadfile" => ["20160430", "garbage"],
            "dtaddto" => ["04302016", "D/S"],
        )
        .unwrap();
        let out = df
            .lazy()
            .select([
                string_to_date_expr("dtadfile", FILE_DATE_FORMAT),
                string_to_date_expr("dtaddto", ADMITTED_UNTIL_FORMAT),
            ])
            .collect()
            .unwrap();

        let expected = (ymd(2016, 4, 30) - ymd(1970, 1, 1)).num_days() as i32;
        assert_eq!(date_days(&out, "dtadfile", 0), Some(expected));
        assert_eq!(date_days(&out, "dtaddto", 0), Some(expected));
        // Unparseable string dates null out instead of borrowing the sentinel.
        assert_eq!(date_days(&out, "dtadfile", 1), None);
        assert_eq!(date_days(&out, "dtaddto", 1), None);
    }

    #[test]
    fn string_dates_parse_from_numeric_columns() {
        let df = df!("dtadfile" => [20160430i64, 20160501i64]).unwrap();
        let out = df
            .lazy()
            .select([string_to_date_expr("dtadfile", FILE_DATE_FORMAT)])
            .collect()
            .unwrap();

        let expected = (ymd(2016, 4, 30) - ymd(1970, 1, 1)).num_days() as i32;
        assert_eq!(date_days(&out, "dtadfile", 0), Some(expected));
    }

    proptest! {
        #[test]
        fn every_in_range_offset_lands_at_epoch_plus_offset(offset in -100_000i32..=100_000) {
            let result = reconcile_day_offset(Some(f64::from(offset)));
            let expected = day_offset_epoch()
                .checked_add_signed(TimeDelta::days(i64::from(offset)))
                .unwrap();
            prop_assert_eq!(result, ReconciledDate::Parsed(expected));
        }

        #[test]
        fn non_numeric_text_always_falls_back(raw in "[a-zA-Z/ ]{1,12}") {
            prop_assume!(raw.trim().parse::<f64>().is_err());
            prop_assert_eq!(
                reconcile_day_offset_str(Some(&raw)),
                ReconciledDate::Unparseable
            );
        }
    }
}
