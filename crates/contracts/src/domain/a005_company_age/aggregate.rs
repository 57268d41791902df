use serde::{Deserialize, Serialize};

use crate::domain::common::{MasterFields, MasterRecord};
use crate::shared::column_schema::ColumnDef;

/// Company age fields (table `company_ages`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyAgeFields {
    pub label: String,
    #[serde(default)]
    pub min_years: Option<i64>,
    #[serde(default)]
    pub max_years: Option<i64>,
}

pub type CompanyAge = MasterRecord<CompanyAgeFields>;

impl MasterFields for CompanyAgeFields {
    fn kind_index() -> &'static str {
        "a005"
    }

    fn table_name() -> &'static str {
        "company_ages"
    }

    fn element_name() -> &'static str {
        "Company age"
    }

    fn list_name() -> &'static str {
        "Company ages"
    }

    fn description() -> Option<&'static str> {
        Some("Years-in-business bands for company profiles.")
    }

    fn field_columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::text("label", "Label").required().placeholder("5-10 years"),
            ColumnDef::number("min_years", "Min years").integer(),
            ColumnDef::number("max_years", "Max years").integer(),
        ]
    }

    fn display_label(&self) -> &str {
        &self.label
    }
}
