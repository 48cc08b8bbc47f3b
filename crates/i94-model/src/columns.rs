//! Column name constants for raw sources and derived tables.
//!
//! Raw names match the source extracts verbatim (SAS variable names for the
//! immigration data, CSV headers for temperature and demographics). Derived
//! names are the snake_case projections the warehouse exposes.

/// Raw source column names, as delivered by the extracts.
pub mod raw {
    /// I94 immigration extract columns (SAS variable names).
    pub mod immigration {
        pub const CICID: &str = "cicid";
        pub const I94YR: &str = "i94yr";
        pub const I94MON: &str = "i94mon";
        pub const I94CIT: &str = "i94cit";
        pub const I94RES: &str = "i94res";
        pub const I94PORT: &str = "i94port";
        pub const I94ADDR: &str = "i94addr";
        pub const ARRDATE: &str = "arrdate";
        pub const DEPDATE: &str = "depdate";
        pub const I94MODE: &str = "i94mode";
        pub const I94VISA: &str = "i94visa";
        pub const BIRYEAR: &str = "biryear";
        pub const GENDER: &str = "gender";
        pub const AIRLINE: &str = "airline";
        pub const ADMNUM: &str = "admnum";
        pub const FLTNO: &str = "fltno";
        pub const VISAPOST: &str = "visapost";
        /// Date added to file, encoded `yyyyMMdd`.
        pub const DTADFILE: &str = "dtadfile";
        /// Admitted-until date, encoded `MMddyyyy`.
        pub const DTADDTO: &str = "dtaddto";
    }

    /// GlobalLandTemperaturesByCity.csv headers.
    pub mod temperature {
        pub const DT: &str = "dt";
        pub const AVERAGE_TEMPERATURE: &str = "AverageTemperature";
        pub const AVERAGE_TEMPERATURE_UNCERTAINTY: &str = "AverageTemperatureUncertainty";
        pub const CITY: &str = "City";
        pub const COUNTRY: &str = "Country";
    }

    /// us-cities-demographics.csv headers.
    pub mod demographics {
        pub const CITY: &str = "City";
        pub const STATE: &str = "State";
        pub const MALE_POPULATION: &str = "Male_Population";
        pub const FEMALE_POPULATION: &str = "Female_Population";
        pub const NO_OF_VETERANS: &str = "No_of_Veterans";
        pub const RACE: &str = "Race";
        pub const FOREIGN_BORN: &str = "Foreign_born";
        pub const AVG_HOUSEHOLD_SIZE: &str = "Avg_Household_Size";
    }
}

/// fact_immigration columns.
pub mod fact {
    pub const IMMIGRATION_ID: &str = "immigration_id";
    pub const RECORD_ID: &str = "record_id";
    pub const YEAR: &str = "year";
    pub const MONTH: &str = "month";
    pub const PORT: &str = "port";
    pub const STATE: &str = "state";
    pub const ARRIVAL_DATE: &str = "arrival_date";
    pub const DEPARTURE_DATE: &str = "departure_date";
    pub const MODE: &str = "mode";
    pub const VISA_CATEGORY: &str = "visa_category";
    pub const COUNTRY: &str = "country";
}

/// personal dimension columns.
pub mod personal {
    pub const PERSONAL_ID: &str = "personal_id";
    pub const RECORD_ID: &str = "record_id";
    pub const CITIZENSHIP_COUNTRY: &str = "citizenship_country";
    pub const RESIDENCY_COUNTRY: &str = "residency_country";
    pub const BIRTH_YEAR: &str = "birth_year";
    pub const GENDER: &str = "gender";
    pub const VISA_CATEGORY: &str = "visa_category";
}

/// airline dimension columns.
pub mod airline {
    pub const AIRLINE_EVENT_ID: &str = "airline_event_id";
    pub const RECORD_ID: &str = "record_id";
    pub const AIRLINE: &str = "airline";
    pub const ADMISSION_NUMBER: &str = "admission_number";
    pub const FLIGHT_NUMBER: &str = "flight_number";
}

/// visa dimension columns. Natural key, no surrogate identifier.
pub mod visa {
    pub const VISA_ID: &str = "visa_id";
    pub const ISSUING_POST: &str = "issuing_post";
}

/// temperature dimension columns.
pub mod temperature {
    pub const DATE: &str = "date";
    pub const AVG_TEMPERATURE: &str = "avg_temperature";
    pub const AVG_TEMPERATURE_UNCERTAINTY: &str = "avg_temperature_uncertainty";
    pub const CITY: &str = "city";
    pub const COUNTRY: &str = "country";
    pub const YEAR: &str = "year";
    pub const MONTH: &str = "month";
}

/// demographics dimension columns.
pub mod demographics {
    pub const DEMOGRAPHICS_ID: &str = "demographics_id";
    pub const CITY: &str = "city";
    pub const STATE: &str = "state";
    pub const MALE_POPULATION: &str = "male_population";
    pub const FEMALE_POPULATION: &str = "female_population";
    pub const VETERAN_COUNT: &str = "veteran_count";
    pub const RACE: &str = "race";
    pub const FOREIGN_BORN: &str = "foreign_born";
    pub const AVG_HOUSEHOLD_SIZE: &str = "avg_household_size";
}

/// Constant country label attached to the fact table and used as the
/// temperature filter. Fixed policy, not configurable.
pub const UNITED_STATES: &str = "United States";
