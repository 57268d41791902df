use serde_json::Value;

use contracts::shared::record_values::display_string;

/// How a table cell renders a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellDisplay {
    /// "Yes" / "No" badge
    Badge(bool),
    /// Placeholder for null or missing values
    Dash,
    Text(String),
}

pub fn cell_display(value: Option<&Value>) -> CellDisplay {
    match value {
        None | Some(Value::Null) => CellDisplay::Dash,
        Some(Value::Bool(b)) => CellDisplay::Badge(*b),
        Some(other) => CellDisplay::Text(display_string(other)),
    }
}

pub fn yes_no(b: bool) -> &'static str {
    if b {
        "Yes"
    } else {
        "No"
    }
}
