use serde::{Deserialize, Serialize};

use crate::domain::common::{MasterFields, MasterRecord};
use crate::shared::column_schema::ColumnDef;
use crate::shared::record_values::whole_number;

/// Revenue range fields (table `revenue_ranges`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueRangeFields {
    pub label: String,
    #[serde(default, serialize_with = "whole_number::serialize")]
    pub min_revenue: Option<f64>,
    #[serde(default, serialize_with = "whole_number::serialize")]
    pub max_revenue: Option<f64>,
}

pub type RevenueRange = MasterRecord<RevenueRangeFields>;

impl MasterFields for RevenueRangeFields {
    fn kind_index() -> &'static str {
        "a004"
    }

    fn table_name() -> &'static str {
        "revenue_ranges"
    }

    fn element_name() -> &'static str {
        "Revenue range"
    }

    fn list_name() -> &'static str {
        "Revenue ranges"
    }

    fn description() -> Option<&'static str> {
        Some("Annual revenue bands for company profiles.")
    }

    fn field_columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::text("label", "Label").required().placeholder("$1M - $10M"),
            ColumnDef::number("min_revenue", "Min revenue"),
            ColumnDef::number("max_revenue", "Max revenue"),
        ]
    }

    fn display_label(&self) -> &str {
        &self.label
    }
}
