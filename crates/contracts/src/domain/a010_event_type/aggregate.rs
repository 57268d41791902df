use serde::{Deserialize, Serialize};

use crate::domain::common::{MasterFields, MasterRecord};
use crate::shared::column_schema::ColumnDef;

/// Event type fields (table `event_types`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTypeFields {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

pub type EventType = MasterRecord<EventTypeFields>;

impl MasterFields for EventTypeFields {
    fn kind_index() -> &'static str {
        "a010"
    }

    fn table_name() -> &'static str {
        "event_types"
    }

    fn element_name() -> &'static str {
        "Event type"
    }

    fn list_name() -> &'static str {
        "Event types"
    }

    fn description() -> Option<&'static str> {
        Some("Types of events on the portal calendar (trade fair, webinar, delegation).")
    }

    fn field_columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::text("name", "Name").required().placeholder("Trade fair"),
            ColumnDef::textarea("description", "Description"),
        ]
    }

    fn display_label(&self) -> &str {
        &self.name
    }
}
