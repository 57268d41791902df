use contracts::shared::column_schema::ColumnDef;
use contracts::shared::record_values::{display_string, RecordValues};
use serde_json::{Number, Value};

/// Create form: every column at its blank value
pub fn blank_form(columns: &[ColumnDef]) -> RecordValues {
    columns
        .iter()
        .map(|c| (c.key.clone(), c.blank_value()))
        .collect()
}

/// Edit form: the record's value of every column
pub fn prefill_form(columns: &[ColumnDef], record: &RecordValues) -> RecordValues {
    columns
        .iter()
        .map(|c| {
            let value = record.get(&c.key).cloned().unwrap_or_else(|| c.blank_value());
            (c.key.clone(), value)
        })
        .collect()
}

/// Value of a numeric input: empty -> `null`, otherwise the parsed number.
///
/// Text that is not a number also yields `null`.
pub fn coerce_number(input: &str) -> Value {
    let input = input.trim();
    if input.is_empty() {
        return Value::Null;
    }
    if let Ok(n) = input.parse::<i64>() {
        return Value::from(n);
    }
    input
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// Text shown inside an input for a form value
pub fn input_text(value: Option<&Value>) -> String {
    value.map(display_string).unwrap_or_default()
}

pub fn is_checked(value: Option<&Value>) -> bool {
    value.and_then(Value::as_bool).unwrap_or(false)
}
