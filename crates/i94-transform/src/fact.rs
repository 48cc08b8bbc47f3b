//! Fact table builder.
//!
//! Pure projection/dedup/partition pipeline: no numeric aggregation
//! happens here. The physical partitioning by residence state is applied
//! by the materializer; this builder only shapes the rows.

use polars::prelude::{DataType, LazyFrame, PlSmallStr, UniqueKeepStrategy, col, lit};

use i94_model::columns::raw::immigration as raw;
use i94_model::columns::{UNITED_STATES, fact};

/// Builds `fact_immigration` from the reconciled immigration frame.
///
/// Projects the event columns, collapses exact duplicates across the
/// projection, assigns a surrogate `immigration_id` unique within this
/// materialization, and attaches the constant source-country label.
pub fn build_fact_immigration(reconciled: LazyFrame) -> LazyFrame {
    reconciled
        .select([
            col(raw::CICID).cast(DataType::Int64).alias(fact::RECORD_ID),
            col(raw::I94YR).cast(DataType::Int32).alias(fact::YEAR),
            col(raw::I94MON).cast(DataType::Int32).alias(fact::MONTH),
            col(raw::I94PORT).alias(fact::PORT),
            col(raw::I94ADDR).alias(fact::STATE),
            col(raw::ARRDATE).alias(fact::ARRIVAL_DATE),
            col(raw::DEPDATE).alias(fact::DEPARTURE_DATE),
            col(raw::I94MODE).cast(DataType::Int32).alias(fact::MODE),
            col(raw::I94VISA)
                .cast(DataType::Int32)
                .alias(fact::VISA_CATEGORY),
        ])
        .unique_stable(None, UniqueKeepStrategy::First)
        .with_row_index(PlSmallStr::from_static(fact::IMMIGRATION_ID), None)
        .with_column(lit(UNITED_STATES).alias(fact::COUNTRY))
}
