use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MasterFields, RecordId};
use crate::shared::master_data::error::MasterDataError;
use crate::shared::record_values::RecordValues;

fn default_active() -> bool {
    true
}

/// Stored master-data row: the shared columns plus the kind's own fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterRecord<F> {
    pub id: RecordId,
    pub code: String,
    #[serde(default)]
    pub sort_order: i64,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(flatten)]
    pub fields: F,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl<F: MasterFields> MasterRecord<F> {
    /// Decode one row as returned by the collaborator
    pub fn from_values(values: RecordValues) -> Result<Self, MasterDataError> {
        serde_json::from_value(serde_json::Value::Object(values))
            .map_err(|e| MasterDataError::Decode(format!("{}: {}", F::table_name(), e)))
    }

    /// Flat field-name -> value view, as consumed by the admin table
    pub fn to_values(&self) -> RecordValues {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => RecordValues::new(),
        }
    }

    pub fn label(&self) -> &str {
        self.fields.display_label()
    }
}

/// Row to be inserted. Carries no id and no timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecord<F> {
    pub code: String,
    pub sort_order: i64,
    pub is_active: bool,
    #[serde(flatten)]
    pub fields: F,
}

impl<F: MasterFields> NewRecord<F> {
    pub fn new(code: &str, fields: F) -> Self {
        Self {
            code: code.to_string(),
            sort_order: 0,
            is_active: true,
            fields,
        }
    }

    pub fn with_sort_order(mut self, sort_order: i64) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn into_values(self) -> RecordValues {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => RecordValues::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_country::aggregate::CountryFields;
    use serde_json::json;

    #[test]
    fn test_decode_row_with_defaults() {
        let row = json!({
            "id": "1f0c",
            "code": "in",
            "name": "India",
            "created_at": "2024-05-01T10:00:00Z"
        });
        let rec = MasterRecord::<CountryFields>::from_values(row.as_object().cloned().unwrap())
            .unwrap();
        assert_eq!(rec.id.as_str(), "1f0c");
        assert_eq!(rec.sort_order, 0);
        assert!(rec.is_active);
        assert_eq!(rec.fields.name, "India");
        assert_eq!(rec.fields.region, None);
        assert!(rec.created_at.is_some());
        assert!(rec.updated_at.is_none());
    }

    #[test]
    fn test_decode_accepts_full_integer_sort_order() {
        let row = json!({"id": "1", "code": "in", "name": "India", "sort_order": 3_000_000_000i64});
        let rec = MasterRecord::<CountryFields>::from_values(row.as_object().cloned().unwrap())
            .unwrap();
        assert_eq!(rec.sort_order, 3_000_000_000);
        assert_eq!(rec.to_values()["sort_order"], json!(3_000_000_000i64));
    }

    #[test]
    fn test_decode_missing_required_field_is_error() {
        let row = json!({"id": "1", "code": "in"});
        let err = MasterRecord::<CountryFields>::from_values(row.as_object().cloned().unwrap())
            .unwrap_err();
        assert!(matches!(err, MasterDataError::Decode(_)));
    }

    #[test]
    fn test_new_record_values_are_flat() {
        let values = NewRecord::new(
            "in",
            CountryFields {
                name: "India".into(),
                region: Some("Asia".into()),
            },
        )
        .with_sort_order(1)
        .into_values();

        assert_eq!(values["code"], json!("in"));
        assert_eq!(values["name"], json!("India"));
        assert_eq!(values["region"], json!("Asia"));
        assert_eq!(values["sort_order"], json!(1));
        assert_eq!(values["is_active"], json!(true));
        assert!(!values.contains_key("id"));
    }

    #[test]
    fn test_to_values_exposes_every_column() {
        let rec = MasterRecord {
            id: RecordId::new("x"),
            code: "fr".into(),
            sort_order: 3,
            is_active: false,
            fields: CountryFields {
                name: "France".into(),
                region: None,
            },
            created_at: None,
            updated_at: None,
        };
        let values = rec.to_values();
        for col in CountryFields::columns() {
            assert!(values.contains_key(&col.key), "missing {}", col.key);
        }
        assert_eq!(values["region"], serde_json::Value::Null);
    }
}
