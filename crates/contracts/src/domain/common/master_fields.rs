use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

use crate::shared::column_schema::{leading_columns, trailing_columns, ColumnDef};

/// Kind-specific part of a master-data row.
///
/// Adding a new reference kind means one struct implementing this trait:
/// a table name, display names and the column schema of its own fields.
/// All CRUD behaviour comes from the generic resource.
pub trait MasterFields:
    Serialize + DeserializeOwned + Clone + Debug + PartialEq + Send + Sync + 'static
{
    // ============================================================================
    // Static metadata of the kind
    // ============================================================================

    /// Index of the kind in the system (e.g. "a001")
    fn kind_index() -> &'static str;

    /// Storage table name (e.g. "countries")
    fn table_name() -> &'static str;

    /// UI name of one element (e.g. "Country")
    fn element_name() -> &'static str;

    /// UI name of the list (e.g. "Countries")
    fn list_name() -> &'static str;

    /// Columns of the kind-specific fields, in display order
    fn field_columns() -> Vec<ColumnDef>;

    /// Short explanation shown under the table title
    fn description() -> Option<&'static str> {
        None
    }

    // ============================================================================
    // Instance data
    // ============================================================================

    /// Human-readable label of the row
    fn display_label(&self) -> &str;

    // ============================================================================
    // Defaults
    // ============================================================================

    /// Key of the list query in the query cache
    fn cache_key() -> String {
        format!("master:{}", Self::table_name())
    }

    /// Full system name (e.g. "a001_countries")
    fn full_name() -> String {
        format!("{}_{}", Self::kind_index(), Self::table_name())
    }

    /// Complete admin-table schema: code, own fields, sort order, active flag
    fn columns() -> Vec<ColumnDef> {
        let mut cols = leading_columns();
        cols.extend(Self::field_columns());
        cols.extend(trailing_columns());
        cols
    }
}
