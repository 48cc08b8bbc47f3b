//! Immigration-derived dimension builders.
//!
//! Personal, airline, and visa each project a disjoint column subset from
//! the shared reconciled frame. Personal and airline carry a fresh
//! surrogate identifier; visa keeps its natural (category, issuing post)
//! key, so the same category appearing under several posts stays as
//! distinct rows.

use polars::prelude::{DataType, LazyFrame, PlSmallStr, UniqueKeepStrategy, col};

use i94_model::columns::raw::immigration as raw;
use i94_model::columns::{airline, personal, visa};

/// Builds the `personal` dimension: traveler attributes per record.
pub fn build_personal_dim(reconciled: LazyFrame) -> LazyFrame {
    reconciled
        .select([
            col(raw::CICID)
                .cast(DataType::Int64)
                .alias(personal::RECORD_ID),
            col(raw::I94CIT)
                .cast(DataType::Int32)
                .alias(personal::CITIZENSHIP_COUNTRY),
            col(raw::I94RES)
                .cast(DataType::Int32)
                .alias(personal::RESIDENCY_COUNTRY),
            col(raw::BIRYEAR)
                .cast(DataType::Int32)
                .alias(personal::BIRTH_YEAR),
            col(raw::GENDER).alias(personal::GENDER),
            col(raw::I94VISA)
                .cast(DataType::Int32)
                .alias(personal::VISA_CATEGORY),
        ])
        .unique_stable(None, UniqueKeepStrategy::First)
        .with_row_index(PlSmallStr::from_static(personal::PERSONAL_ID), None)
}

/// Builds the `airline` dimension: carrier and flight attributes per record.
pub fn build_airline_dim(reconciled: LazyFrame) -> LazyFrame {
    reconciled
        .select([
            col(raw::CICID)
                .cast(DataType::Int64)
                .alias(airline::RECORD_ID),
            col(raw::AIRLINE).alias(airline::AIRLINE),
            col(raw::ADMNUM)
                .cast(DataType::Int64)
                .alias(airline::ADMISSION_NUMBER),
            col(raw::FLTNO).alias(airline::FLIGHT_NUMBER),
        ])
        .unique_stable(None, UniqueKeepStrategy::First)
        .with_row_index(PlSmallStr::from_static(airline::AIRLINE_EVENT_ID), None)
}

/// Builds the `vis_dim` dimension: visa categories by issuing post.
///
/// No surrogate identifier: the deduplicated (category, post) pair is the
/// key, with the category column renamed for clarity.
pub fn build_visa_dim(reconciled: LazyFrame) -> LazyFrame {
    reconciled
        .select([
            col(raw::I94VISA).cast(DataType::Int32).alias(visa::VISA_ID),
            col(raw::VISAPOST).alias(visa::ISSUING_POST),
        ])
        .unique_stable(None, UniqueKeepStrategy::First)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{DataFrame, IntoLazy, df};

    use crate::frame::reconcile_immigration_dates;

    fn reconciled() -> LazyFrame {
        // Records 6 and 6 share traveler attributes but flew different
        // flights; record 7 shares the visa category under another post.
        let df = df!(
            "cicid" => [6i64, 6, 7],
            "i94cit" => [101i64, 101, 213],
            "i94res" => [101i64, 101, 213],
            "biryear" => [1979i64, 1979, 1991],
            "gender" => ["M", "M", "F"],
            "i94visa" => [2i64, 2, 2],
            "airline" => ["LH", "UA", "UA"],
            "admnum" => [1_234_567i64, 1_234_568, 1_234_569],
            "fltno" => ["00011", "00022", "00022"],
            "visapost" => ["MUN", "MUN", "SYD"],
            "arrdate" => [20566i64, 20566, 20567],
            "depdate" => [20570i64, 20570, 20571],
            "dtadfile" => ["20160430", "20160430", "20160430"],
            "dtaddto" => ["10292016", "10292016", "10292016"],
        )
        .unwrap();
        reconcile_immigration_dates(df.lazy())
    }

    fn collect(lf: LazyFrame) -> DataFrame {
        lf.collect().unwrap()
    }

    #[test]
    fn personal_dedups_and_assigns_unique_ids() {
        let personal_dim = collect(build_personal_dim(reconciled()));
        // The two flights of record 6 are one traveler row.
        assert_eq!(personal_dim.height(), 2);
        let ids = personal_dim.column(personal::PERSONAL_ID).unwrap();
        assert_eq!(ids.n_unique().unwrap(), personal_dim.height());
    }

    #[test]
    fn airline_keeps_rows_the_fact_projection_would_collapse() {
        let airline_dim = collect(build_airline_dim(reconciled()));
        // Distinct flight numbers keep all three rows alive.
        assert_eq!(airline_dim.height(), 3);
        let ids = airline_dim.column(airline::AIRLINE_EVENT_ID).unwrap();
        assert_eq!(ids.n_unique().unwrap(), airline_dim.height());
    }

    #[test]
    fn visa_keeps_one_row_per_category_and_post() {
        let visa_dim = collect(build_visa_dim(reconciled()));
        // Category 2 appears under two posts and stays as two rows.
        assert_eq!(visa_dim.height(), 2);
        assert_eq!(
            visa_dim.get_column_names_str(),
            vec![visa::VISA_ID, visa::ISSUING_POST]
        );
    }

    #[test]
    fn projections_are_disjoint_views_of_the_source() {
        let personal_dim = collect(build_personal_dim(reconciled()));
        let airline_dim = collect(build_airline_dim(reconciled()));
        assert!(personal_dim.column(airline::FLIGHT_NUMBER).is_err());
        assert!(airline_dim.column(personal::BIRTH_YEAR).is_err());
    }
}
