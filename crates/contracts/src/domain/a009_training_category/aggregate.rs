use serde::{Deserialize, Serialize};

use crate::domain::common::{MasterFields, MasterRecord};
use crate::shared::column_schema::ColumnDef;

/// Training category fields (table `training_categories`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingCategoryFields {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

pub type TrainingCategory = MasterRecord<TrainingCategoryFields>;

impl MasterFields for TrainingCategoryFields {
    fn kind_index() -> &'static str {
        "a009"
    }

    fn table_name() -> &'static str {
        "training_categories"
    }

    fn element_name() -> &'static str {
        "Training category"
    }

    fn list_name() -> &'static str {
        "Training categories"
    }

    fn description() -> Option<&'static str> {
        Some("Categories of the export training catalogue.")
    }

    fn field_columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::text("name", "Name").required().placeholder("Export documentation"),
            ColumnDef::textarea("description", "Description"),
            ColumnDef::text("icon", "Icon").placeholder("book"),
        ]
    }

    fn display_label(&self) -> &str {
        &self.name
    }
}
