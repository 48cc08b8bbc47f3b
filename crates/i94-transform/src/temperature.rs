//! Temperature dimension builder.

use polars::prelude::{DataType, LazyFrame, UniqueKeepStrategy, col, lit};

use i94_model::columns::raw::temperature as raw;
use i94_model::columns::{UNITED_STATES, temperature};

use crate::dates::string_to_date_expr;

/// Calendar format of the `dt` observation column.
const OBSERVATION_DATE_FORMAT: &str = "%Y-%m-%d";

/// Builds `dim_temperature` from the raw city observations.
///
/// Rows of any country other than the United States are dropped entirely;
/// this is a hard policy, not configurable. The observation date parses to
/// canonical form (null on failure, like the other string dates) and year
/// and month are derived as integer attributes for downstream filtering.
pub fn build_temperature_dim(observations: LazyFrame) -> LazyFrame {
    observations
        .filter(col(raw::COUNTRY).eq(lit(UNITED_STATES)))
        .select([
            col(raw::DT).alias(temperature::DATE),
            col(raw::AVERAGE_TEMPERATURE)
                .cast(DataType::Float64)
                .alias(temperature::AVG_TEMPERATURE),
            col(raw::AVERAGE_TEMPERATURE_UNCERTAINTY)
                .cast(DataType::Float64)
                .alias(temperature::AVG_TEMPERATURE_UNCERTAINTY),
            col(raw::CITY).alias(temperature::CITY),
            col(raw::COUNTRY).alias(temperature::COUNTRY),
        ])
        .unique_stable(None, UniqueKeepStrategy::First)
        .with_column(string_to_date_expr(
            temperature::DATE,
            OBSERVATION_DATE_FORMAT,
        ))
        .with_columns([
            col(temperature::DATE).dt().year().alias(temperature::YEAR),
            col(temperature::DATE)
                .dt()
                .month()
                .cast(DataType::Int32)
                .alias(temperature::MONTH),
        ])
}
