use serde::{Deserialize, Serialize};

use crate::domain::common::{MasterFields, MasterRecord};
use crate::shared::column_schema::ColumnDef;

/// Country fields (table `countries`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryFields {
    pub name: String,
    #[serde(default)]
    pub region: Option<String>,
}

pub type Country = MasterRecord<CountryFields>;

impl MasterFields for CountryFields {
    fn kind_index() -> &'static str {
        "a001"
    }

    fn table_name() -> &'static str {
        "countries"
    }

    fn element_name() -> &'static str {
        "Country"
    }

    fn list_name() -> &'static str {
        "Countries"
    }

    fn description() -> Option<&'static str> {
        Some("Countries selectable in exporter/importer profiles and delegation filters.")
    }

    fn field_columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::text("name", "Name").required().placeholder("India"),
            ColumnDef::text("region", "Region").placeholder("Asia"),
        ]
    }

    fn display_label(&self) -> &str {
        &self.name
    }
}
