use serde::{Deserialize, Serialize};

use crate::domain::common::{MasterFields, MasterRecord};
use crate::shared::column_schema::ColumnDef;

/// Business event fields (table `business_events`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessEventFields {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

pub type BusinessEvent = MasterRecord<BusinessEventFields>;

impl MasterFields for BusinessEventFields {
    fn kind_index() -> &'static str {
        "a007"
    }

    fn table_name() -> &'static str {
        "business_events"
    }

    fn element_name() -> &'static str {
        "Business event"
    }

    fn list_name() -> &'static str {
        "Business events"
    }

    fn description() -> Option<&'static str> {
        Some("Company events (funding, expansion, hiring) used as search signals.")
    }

    fn field_columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::text("name", "Name").required().placeholder("New funding round"),
            ColumnDef::textarea("description", "Description"),
        ]
    }

    fn display_label(&self) -> &str {
        &self.name
    }
}
