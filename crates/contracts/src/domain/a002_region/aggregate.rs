use serde::{Deserialize, Serialize};

use crate::domain::common::{MasterFields, MasterRecord};
use crate::shared::column_schema::ColumnDef;

/// Region fields (table `regions`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionFields {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

pub type Region = MasterRecord<RegionFields>;

impl MasterFields for RegionFields {
    fn kind_index() -> &'static str {
        "a002"
    }

    fn table_name() -> &'static str {
        "regions"
    }

    fn element_name() -> &'static str {
        "Region"
    }

    fn list_name() -> &'static str {
        "Regions"
    }

    fn description() -> Option<&'static str> {
        Some("World regions used to group countries.")
    }

    fn field_columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::text("name", "Name").required().placeholder("South Asia"),
            ColumnDef::textarea("description", "Description"),
        ]
    }

    fn display_label(&self) -> &str {
        &self.name
    }
}
