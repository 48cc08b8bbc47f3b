//! Demographics dimension builder.

use polars::prelude::{DataType, LazyFrame, PlSmallStr, UniqueKeepStrategy, col};

use i94_model::columns::demographics;
use i94_model::columns::raw::demographics as raw;

/// Builds `demographics` from the raw per-city snapshot.
///
/// Pure projection with no filtering and no date fields: project, dedup,
/// assign a surrogate identifier.
pub fn build_demographics_dim(snapshot: LazyFrame) -> LazyFrame {
    snapshot
        .select([
            col(raw::CITY).alias(demographics::CITY),
            col(raw::STATE).alias(demographics::STATE),
            col(raw::MALE_POPULATION)
                .cast(DataType::Int64)
                .alias(demographics::MALE_POPULATION),
            col(raw::FEMALE_POPULATION)
                .cast(DataType::Int64)
                .alias(demographics::FEMALE_POPULATION),
            col(raw::NO_OF_VETERANS)
                .cast(DataType::Int64)
                .alias(demographics::VETERAN_COUNT),
            col(raw::RACE).alias(demographics::RACE),
            col(raw::FOREIGN_BORN)
                .cast(DataType::Int64)
                .alias(demographics::FOREIGN_BORN),
            col(raw::AVG_HOUSEHOLD_SIZE)
                .cast(DataType::Float64)
                .alias(demographics::AVG_HOUSEHOLD_SIZE),
        ])
        .unique_stable(None, UniqueKeepStrategy::First)
        .with_row_index(
            PlSmallStr::from_static(demographics::DEMOGRAPHICS_ID),
            None,
        )
}
