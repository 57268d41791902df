use contracts::shared::column_schema::ColumnDef;
use contracts::shared::record_values::{display_string, RecordValues};

/// Rows where any column's string form contains `query`, ignoring case.
///
/// An empty (or whitespace-only) query keeps every row. Relative order is kept.
pub fn filter_records(rows: &[RecordValues], columns: &[ColumnDef], query: &str) -> Vec<RecordValues> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| matches(row, columns, &query))
        .cloned()
        .collect()
}

fn matches(row: &RecordValues, columns: &[ColumnDef], query: &str) -> bool {
    columns.iter().any(|col| {
        row.get(&col.key)
            .map(|v| display_string(v).to_lowercase().contains(query))
            .unwrap_or(false)
    })
}
