use async_trait::async_trait;

use super::error::MasterDataError;
use crate::shared::record_values::RecordValues;

/// Table-level access to the hosted database.
///
/// Futures are not `Send`: the browser implementation runs on the wasm
/// single-threaded executor.
#[async_trait(?Send)]
pub trait TableClient {
    /// All rows of `table`, ascending by `order_by`
    async fn select_ordered(
        &self,
        table: &str,
        order_by: &str,
    ) -> Result<Vec<RecordValues>, MasterDataError>;

    /// Insert a row; returns the stored row with id and timestamps
    async fn insert(
        &self,
        table: &str,
        values: RecordValues,
    ) -> Result<RecordValues, MasterDataError>;

    /// Update the given columns of row `id`; returns the stored row
    async fn update(
        &self,
        table: &str,
        id: &str,
        values: RecordValues,
    ) -> Result<RecordValues, MasterDataError>;

    async fn delete(&self, table: &str, id: &str) -> Result<(), MasterDataError>;
}
