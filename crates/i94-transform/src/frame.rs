//! Shared reconciled immigration frame.
//!
//! Date reconciliation over the immigration source is computed once and the
//! resulting lazy frame is handed to every immigration-derived builder.
//! The reconciled frame keeps the raw column names; builders project and
//! rename from it.

use polars::prelude::LazyFrame;
use tracing::debug;

use i94_model::columns::raw::immigration as raw;

use crate::dates::{
    ADMITTED_UNTIL_FORMAT, FILE_DATE_FORMAT, day_offset_to_date_expr, string_to_date_expr,
};

/// Replaces the four raw date columns with canonical dates.
///
/// `arrdate` and `depdate` go through offset reconciliation (sentinel on
/// failure); `dtadfile` and `dtaddto` parse against their declared formats
/// (null on failure). No projection consumes the latter two, but they are
/// part of the reconciled frame so every downstream view of the source
/// shares one date policy.
pub fn reconcile_immigration_dates(immigration: LazyFrame) -> LazyFrame {
    debug!("reconciling immigration date columns");
    immigration.with_columns([
        day_offset_to_date_expr(raw::ARRDATE),
        day_offset_to_date_expr(raw::DEPDATE),
        string_to_date_expr(raw::DTADFILE, FILE_DATE_FORMAT),
        string_to_date_expr(raw::DTADDTO, ADMITTED_UNTIL_FORMAT),
    ])
}
