use serde::{Deserialize, Serialize};

use crate::domain::common::{MasterFields, MasterRecord};
use crate::shared::column_schema::ColumnDef;

/// Company size fields (table `company_sizes`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanySizeFields {
    pub label: String,
    #[serde(default)]
    pub min_employees: Option<i64>,
    #[serde(default)]
    pub max_employees: Option<i64>,
}

pub type CompanySize = MasterRecord<CompanySizeFields>;

impl MasterFields for CompanySizeFields {
    fn kind_index() -> &'static str {
        "a003"
    }

    fn table_name() -> &'static str {
        "company_sizes"
    }

    fn element_name() -> &'static str {
        "Company size"
    }

    fn list_name() -> &'static str {
        "Company sizes"
    }

    fn description() -> Option<&'static str> {
        Some("Headcount bands for company profiles.")
    }

    fn field_columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::text("label", "Label").required().placeholder("11-50 employees"),
            ColumnDef::number("min_employees", "Min employees").integer(),
            ColumnDef::number("max_employees", "Max employees").integer(),
        ]
    }

    fn display_label(&self) -> &str {
        &self.label
    }
}
