use serde::{Deserialize, Serialize};

use crate::domain::common::{MasterFields, MasterRecord};
use crate::shared::column_schema::ColumnDef;

/// Intent topic fields (table `intent_topics`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentTopicFields {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

pub type IntentTopic = MasterRecord<IntentTopicFields>;

impl MasterFields for IntentTopicFields {
    fn kind_index() -> &'static str {
        "a008"
    }

    fn table_name() -> &'static str {
        "intent_topics"
    }

    fn element_name() -> &'static str {
        "Intent topic"
    }

    fn list_name() -> &'static str {
        "Intent topics"
    }

    fn description() -> Option<&'static str> {
        Some("Buyer intent topics used as search signals.")
    }

    fn field_columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::text("name", "Name").required().placeholder("Import sourcing"),
            ColumnDef::textarea("description", "Description"),
        ]
    }

    fn display_label(&self) -> &str {
        &self.name
    }
}
