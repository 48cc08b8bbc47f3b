//! Core warehouse transformations.
//!
//! Every builder is a pure function from a lazy frame to a lazy frame:
//! transformations declare intent, and nothing is computed until a
//! materialization step collects the plan. Builders share the reconciled
//! immigration frame from [`frame::reconcile_immigration_dates`] and do not
//! depend on each other's outputs.

pub mod dates;
pub mod demographics;
pub mod dims;
pub mod fact;
pub mod frame;
pub mod temperature;

pub use dates::{
    ADMITTED_UNTIL_FORMAT, FILE_DATE_FORMAT, ReconciledDate, day_offset_epoch,
    day_offset_to_date_expr, reconcile_day_offset, reconcile_day_offset_str, sentinel_date,
    string_to_date_expr,
};
pub use demographics::build_demographics_dim;
pub use dims::{build_airline_dim, build_personal_dim, build_visa_dim};
pub use fact::build_fact_immigration;
pub use frame::reconcile_immigration_dates;
pub use temperature::build_temperature_dim;
