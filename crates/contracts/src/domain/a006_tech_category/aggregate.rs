use serde::{Deserialize, Serialize};

use crate::domain::common::{MasterFields, MasterRecord};
use crate::shared::column_schema::ColumnDef;

/// Tech category fields (table `tech_categories`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechCategoryFields {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

pub type TechCategory = MasterRecord<TechCategoryFields>;

impl MasterFields for TechCategoryFields {
    fn kind_index() -> &'static str {
        "a006"
    }

    fn table_name() -> &'static str {
        "tech_categories"
    }

    fn element_name() -> &'static str {
        "Tech category"
    }

    fn list_name() -> &'static str {
        "Tech categories"
    }

    fn description() -> Option<&'static str> {
        Some("Technology categories used by the business-data search filters.")
    }

    fn field_columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::text("name", "Name").required().placeholder("Cloud infrastructure"),
            ColumnDef::textarea("description", "Description"),
            ColumnDef::text("icon", "Icon").placeholder("cloud"),
        ]
    }

    fn display_label(&self) -> &str {
        &self.name
    }
}
