//! Column schema for master-data tables
//!
//! A `ColumnDef` list is the only thing that differs between the admin tables
//! of two reference kinds. The frontend renders inputs and cells from it, the
//! backend uses it to whitelist columns and to decode stored values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of input/cell a column is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Number,
    Boolean,
    Textarea,
    /// Unknown type names fall back to a single-line text input.
    #[default]
    #[serde(other)]
    Text,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Textarea => "textarea",
        }
    }
}

/// Description of one editable column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub key: String,
    pub label: String,
    #[serde(rename = "type", default)]
    pub column_type: ColumnType,
    #[serde(default)]
    pub required: bool,
    /// Number column that only accepts whole numbers
    #[serde(default)]
    pub integer: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Value a blank create form starts with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
}

impl ColumnDef {
    pub fn new(key: &str, label: &str, column_type: ColumnType) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            column_type,
            required: false,
            integer: false,
            placeholder: None,
            default_value: None,
        }
    }

    pub fn text(key: &str, label: &str) -> Self {
        Self::new(key, label, ColumnType::Text)
    }

    pub fn number(key: &str, label: &str) -> Self {
        Self::new(key, label, ColumnType::Number)
    }

    pub fn boolean(key: &str, label: &str) -> Self {
        Self::new(key, label, ColumnType::Boolean)
    }

    pub fn textarea(key: &str, label: &str) -> Self {
        Self::new(key, label, ColumnType::Textarea)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn integer(mut self) -> Self {
        self.integer = true;
        self
    }

    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn default_value(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Initial value of this column in a blank form
    pub fn blank_value(&self) -> Value {
        if let Some(v) = &self.default_value {
            return v.clone();
        }
        match self.column_type {
            ColumnType::Text | ColumnType::Textarea => Value::String(String::new()),
            ColumnType::Number => Value::Null,
            ColumnType::Boolean => Value::Bool(false),
        }
    }
}

/// Columns every master-data table starts with
pub fn leading_columns() -> Vec<ColumnDef> {
    vec![ColumnDef::text("code", "Code").required().placeholder("e.g. in")]
}

/// Columns every master-data table ends with
pub fn trailing_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::number("sort_order", "Sort order")
            .integer()
            .default_value(Value::from(0)),
        ColumnDef::boolean("is_active", "Active").default_value(Value::Bool(true)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_type_falls_back_to_text() {
        let col: ColumnDef =
            serde_json::from_value(json!({"key": "x", "label": "X", "type": "date"})).unwrap();
        assert_eq!(col.column_type, ColumnType::Text);

        let col: ColumnDef = serde_json::from_value(json!({"key": "x", "label": "X"})).unwrap();
        assert_eq!(col.column_type, ColumnType::Text);
        assert!(!col.required);
    }

    #[test]
    fn test_known_types_roundtrip_by_name() {
        for t in [
            ColumnType::Text,
            ColumnType::Number,
            ColumnType::Boolean,
            ColumnType::Textarea,
        ] {
            let v = serde_json::to_value(t).unwrap();
            assert_eq!(v, json!(t.as_str()));
            assert_eq!(serde_json::from_value::<ColumnType>(v).unwrap(), t);
        }
    }

    #[test]
    fn test_blank_values() {
        assert_eq!(ColumnDef::text("a", "A").blank_value(), json!(""));
        assert_eq!(ColumnDef::textarea("a", "A").blank_value(), json!(""));
        assert_eq!(ColumnDef::number("a", "A").blank_value(), Value::Null);
        assert_eq!(ColumnDef::boolean("a", "A").blank_value(), json!(false));

        let trailing = trailing_columns();
        assert_eq!(trailing[0].blank_value(), json!(0));
        assert_eq!(trailing[1].blank_value(), json!(true));
    }
}
