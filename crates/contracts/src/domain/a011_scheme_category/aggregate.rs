use serde::{Deserialize, Serialize};

use crate::domain::common::{MasterFields, MasterRecord};
use crate::shared::column_schema::ColumnDef;

/// Scheme category fields (table `scheme_categories`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeCategoryFields {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

pub type SchemeCategory = MasterRecord<SchemeCategoryFields>;

impl MasterFields for SchemeCategoryFields {
    fn kind_index() -> &'static str {
        "a011"
    }

    fn table_name() -> &'static str {
        "scheme_categories"
    }

    fn element_name() -> &'static str {
        "Scheme category"
    }

    fn list_name() -> &'static str {
        "Scheme categories"
    }

    fn description() -> Option<&'static str> {
        Some("Categories of government support schemes.")
    }

    fn field_columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::text("name", "Name").required().placeholder("Export subsidy"),
            ColumnDef::textarea("description", "Description"),
        ]
    }

    fn display_label(&self) -> &str {
        &self.name
    }
}
