//! Registry of the derived warehouse tables.

use crate::columns::fact;

/// Static description of one output table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    /// Output directory name under the output root.
    pub name: &'static str,
    /// Human-readable description for summaries and listings.
    pub description: &'static str,
    /// Physical partition key, if the table is partitioned.
    pub partitioned_by: Option<&'static str>,
}

/// Output table names.
pub const FACT_IMMIGRATION: &str = "fact_immigration";
pub const PERSONAL: &str = "personal";
pub const AIRLINE: &str = "airline";
pub const VIS_DIM: &str = "vis_dim";
pub const DIM_TEMPERATURE: &str = "dim_temperature";
pub const DEMOGRAPHICS: &str = "demographics";

/// All warehouse tables, in materialization order.
pub const WAREHOUSE_TABLES: [TableSpec; 6] = [
    TableSpec {
        name: FACT_IMMIGRATION,
        description: "Immigration events (one row per distinct arrival record)",
        partitioned_by: Some(fact::STATE),
    },
    TableSpec {
        name: PERSONAL,
        description: "Traveler attributes per immigration record",
        partitioned_by: None,
    },
    TableSpec {
        name: AIRLINE,
        description: "Airline and flight attributes per immigration record",
        partitioned_by: None,
    },
    TableSpec {
        name: VIS_DIM,
        description: "Visa categories by issuing post",
        partitioned_by: None,
    },
    TableSpec {
        name: DIM_TEMPERATURE,
        description: "US city temperature observations",
        partitioned_by: None,
    },
    TableSpec {
        name: DEMOGRAPHICS,
        description: "US city demographic snapshots",
        partitioned_by: None,
    },
];

/// Looks up a table spec by output name.
pub fn table_spec(name: &str) -> Option<&'static TableSpec> {
    WAREHOUSE_TABLES.iter().find(|spec| spec.name == name)
}
