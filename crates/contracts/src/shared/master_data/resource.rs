use std::marker::PhantomData;
use std::sync::Arc;

use super::cache::QueryCache;
use super::client::TableClient;
use super::error::MasterDataError;
use super::notify::{Notification, Notifier};
use super::SORT_KEY;
use crate::domain::common::{MasterFields, MasterRecord, NewRecord, RecordId};
use crate::shared::record_values::{strip_server_fields, RecordValues};

#[derive(Debug, Clone, Copy)]
enum Mutation {
    Create,
    Update,
    Delete,
}

impl Mutation {
    fn past(&self) -> &'static str {
        match self {
            Self::Create => "created",
            Self::Update => "updated",
            Self::Delete => "deleted",
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// CRUD access to one master-data table.
///
/// The cache, the collaborator and the notification channel are injected;
/// the resource itself holds no rows. Mutations are independent of each other
/// and carry no version token, so concurrent writers to one row resolve as
/// last-write-wins in storage.
pub struct MasterResource<F, C, N> {
    client: C,
    cache: Arc<QueryCache>,
    notifier: N,
    _kind: PhantomData<fn() -> F>,
}

impl<F, C, N> MasterResource<F, C, N>
where
    F: MasterFields,
    C: TableClient,
    N: Notifier,
{
    pub fn new(client: C, cache: Arc<QueryCache>, notifier: N) -> Self {
        Self {
            client,
            cache,
            notifier,
            _kind: PhantomData,
        }
    }

    pub fn cache_key(&self) -> String {
        F::cache_key()
    }

    pub fn cache(&self) -> &Arc<QueryCache> {
        &self.cache
    }

    // ============================================================================
    // Read
    // ============================================================================

    /// All rows ordered by `sort_order` ascending. Served from the cache when
    /// the key has not been invalidated since the last fetch.
    pub async fn list(&self) -> Result<Vec<MasterRecord<F>>, MasterDataError> {
        let rows = self.rows().await?;
        rows.iter()
            .cloned()
            .map(MasterRecord::from_values)
            .collect()
    }

    /// Same as `list`, flattened to field-name -> value maps
    pub async fn list_values(&self) -> Result<Vec<RecordValues>, MasterDataError> {
        Ok(self.list().await?.iter().map(MasterRecord::to_values).collect())
    }

    /// Rows visible to consuming screens (pickers, public filters)
    pub async fn list_active(&self) -> Result<Vec<MasterRecord<F>>, MasterDataError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|r| r.is_active)
            .collect())
    }

    async fn rows(&self) -> Result<Arc<Vec<RecordValues>>, MasterDataError> {
        let key = F::cache_key();
        if let Some(rows) = self.cache.get(&key) {
            return Ok(rows);
        }

        let generation = self.cache.generation(&key);
        let mut rows = self
            .client
            .select_ordered(F::table_name(), SORT_KEY)
            .await?;
        // stable: equal sort orders keep the collaborator's relative order
        rows.sort_by_key(sort_order_of);

        self.cache.store_if_current(&key, generation, rows.clone());
        Ok(Arc::new(rows))
    }

    // ============================================================================
    // Write
    // ============================================================================

    /// Insert a row. `id` and timestamps in `values` are ignored.
    pub async fn create(&self, values: RecordValues) -> Result<MasterRecord<F>, MasterDataError> {
        let written = self
            .client
            .insert(F::table_name(), strip_server_fields(values))
            .await;
        let result = self.after_write(written).and_then(MasterRecord::from_values);
        self.report(Mutation::Create, &result);
        result
    }

    pub async fn create_new(&self, record: NewRecord<F>) -> Result<MasterRecord<F>, MasterDataError> {
        self.create(record.into_values()).await
    }

    /// Update the columns present in `values` of row `id`
    pub async fn update(
        &self,
        id: &RecordId,
        values: RecordValues,
    ) -> Result<MasterRecord<F>, MasterDataError> {
        let written = self
            .client
            .update(F::table_name(), id.as_str(), strip_server_fields(values))
            .await;
        let result = self.after_write(written).and_then(MasterRecord::from_values);
        self.report(Mutation::Update, &result);
        result
    }

    pub async fn delete(&self, id: &RecordId) -> Result<(), MasterDataError> {
        let written = self.client.delete(F::table_name(), id.as_str()).await;
        let result = self.after_write(written);
        self.report(Mutation::Delete, &result);
        result
    }

    /// Invalidate once storage accepted the write, even if the response is unusable
    fn after_write<T>(&self, written: Result<T, MasterDataError>) -> Result<T, MasterDataError> {
        if written.is_ok() {
            self.cache.invalidate(&F::cache_key());
        }
        written
    }

    fn report<T>(&self, mutation: Mutation, result: &Result<T, MasterDataError>) {
        let element = F::element_name();
        let notification = match result {
            Ok(_) => Notification::success(format!("{} {}", element, mutation.past())),
            Err(e) => Notification::error(
                format!("Failed to {} {}", mutation.verb(), element.to_lowercase()),
                e.to_string(),
            ),
        };
        self.notifier.notify(notification);
    }
}

fn sort_order_of(row: &RecordValues) -> i64 {
    row.get(SORT_KEY).and_then(|v| v.as_i64()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_country::aggregate::CountryFields;
    use crate::shared::master_data::notify::Severity;
    use crate::shared::master_data::testing::{MemoryTableClient, RecordingNotifier};
    use serde_json::json;

    type Countries = MasterResource<CountryFields, MemoryTableClient, RecordingNotifier>;

    fn setup() -> (Countries, MemoryTableClient, RecordingNotifier) {
        let client = MemoryTableClient::new();
        let notifier = RecordingNotifier::default();
        let resource = MasterResource::new(client.clone(), QueryCache::shared(), notifier.clone());
        (resource, client, notifier)
    }

    fn values(v: serde_json::Value) -> RecordValues {
        v.as_object().cloned().unwrap()
    }

    fn india() -> RecordValues {
        values(json!({
            "code": "in",
            "name": "India",
            "region": "Asia",
            "sort_order": 1,
            "is_active": true
        }))
    }

    #[tokio::test]
    async fn test_list_is_sorted_by_sort_order() {
        let (countries, client, _) = setup();
        for (code, order) in [("c", 3), ("a", 1), ("b", 2), ("d", 1), ("e", 0)] {
            client.seed(
                "countries",
                values(json!({"code": code, "name": code, "sort_order": order})),
            );
        }

        let list = countries.list().await.unwrap();
        assert_eq!(list.len(), 5);
        assert!(list.windows(2).all(|w| w[0].sort_order <= w[1].sort_order));
    }

    #[tokio::test]
    async fn test_empty_table_lists_empty() {
        let (countries, _, _) = setup();
        assert!(countries.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_then_list_contains_record_with_fresh_id() {
        let (countries, _, notifier) = setup();
        let before: Vec<RecordId> = countries.list().await.unwrap().into_iter().map(|r| r.id).collect();

        let created = countries.create(india()).await.unwrap();
        assert!(!before.contains(&created.id));
        assert!(created.created_at.is_some());

        let list = countries.list().await.unwrap();
        let found: Vec<_> = list.iter().filter(|r| r.code == "in").collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, created.id);
        assert_eq!(found[0].fields.name, "India");
        assert_eq!(found[0].fields.region.as_deref(), Some("Asia"));
        assert_eq!(found[0].sort_order, 1);
        assert!(found[0].is_active);

        let last = notifier.last().unwrap();
        assert_eq!(last.severity, Severity::Success);
        assert_eq!(last.title, "Country created");
    }

    #[tokio::test]
    async fn test_create_ignores_client_supplied_id_and_timestamps() {
        let (countries, _, _) = setup();
        let mut body = india();
        body.insert("id".into(), json!("chosen-by-client"));
        body.insert("created_at".into(), json!("1999-01-01T00:00:00Z"));

        let created = countries.create(body).await.unwrap();
        assert_ne!(created.id.as_str(), "chosen-by-client");
        assert_ne!(
            created.created_at.map(|t| t.to_rfc3339()),
            Some("1999-01-01T00:00:00+00:00".to_string())
        );
    }

    #[tokio::test]
    async fn test_list_is_cached_until_mutation() {
        let (countries, client, _) = setup();
        countries.list().await.unwrap();
        countries.list().await.unwrap();
        assert_eq!(client.select_calls(), 1);

        countries.create(india()).await.unwrap();
        countries.list().await.unwrap();
        assert_eq!(client.select_calls(), 2);
    }

    #[tokio::test]
    async fn test_update_keeps_code_and_is_idempotent() {
        let (countries, _, _) = setup();
        let created = countries.create(india()).await.unwrap();

        let patch = values(json!({"name": "Republic of India"}));
        let once = countries.update(&created.id, patch.clone()).await.unwrap();
        let twice = countries.update(&created.id, patch).await.unwrap();

        assert_eq!(once.fields, twice.fields);
        assert_eq!(once.code, twice.code);
        assert_eq!(once.sort_order, twice.sort_order);
        assert_eq!(once.is_active, twice.is_active);

        let list = countries.list().await.unwrap();
        let rec = list.iter().find(|r| r.id == created.id).unwrap();
        assert_eq!(rec.fields.name, "Republic of India");
        assert_eq!(rec.code, "in");
    }

    #[tokio::test]
    async fn test_sequential_updates_last_write_wins() {
        let (countries, _, _) = setup();
        let created = countries.create(india()).await.unwrap();

        countries
            .update(&created.id, values(json!({"sort_order": 5})))
            .await
            .unwrap();
        countries
            .update(&created.id, values(json!({"sort_order": 9})))
            .await
            .unwrap();

        let list = countries.list().await.unwrap();
        assert_eq!(list.iter().find(|r| r.id == created.id).unwrap().sort_order, 9);
    }

    #[tokio::test]
    async fn test_large_sort_order_round_trips() {
        let (countries, _, notifier) = setup();
        let mut body = india();
        body.insert("sort_order".into(), json!(3_000_000_000i64));

        let created = countries.create(body).await.unwrap();
        assert_eq!(created.sort_order, 3_000_000_000);
        assert_eq!(notifier.last().unwrap().severity, Severity::Success);

        let list = countries.list().await.unwrap();
        assert_eq!(list[0].sort_order, 3_000_000_000);
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let (countries, _, notifier) = setup();
        let created = countries.create(india()).await.unwrap();
        countries.list().await.unwrap();

        countries.delete(&created.id).await.unwrap();
        let list = countries.list().await.unwrap();
        assert!(list.iter().all(|r| r.id != created.id));
        assert_eq!(notifier.last().unwrap().title, "Country deleted");
    }

    #[tokio::test]
    async fn test_failed_create_leaves_list_and_cache_untouched() {
        let (countries, client, notifier) = setup();
        countries.create(india()).await.unwrap();
        let before = countries.list().await.unwrap();
        let selects = client.select_calls();

        // duplicate code is rejected by storage
        let err = countries.create(india()).await.unwrap_err();
        assert!(matches!(err, MasterDataError::Collaborator(_)));

        let last = notifier.last().unwrap();
        assert_eq!(last.severity, Severity::Error);
        assert_eq!(last.title, "Failed to create country");
        assert_eq!(last.description.as_deref(), Some(err.to_string().as_str()));

        let after = countries.list().await.unwrap();
        assert_eq!(after.len(), before.len());
        assert_eq!(client.select_calls(), selects, "cache must not be invalidated");
    }

    #[tokio::test]
    async fn test_failed_update_and_delete_of_missing_row() {
        let (countries, _, notifier) = setup();
        countries.create(india()).await.unwrap();
        let before = countries.list().await.unwrap();

        let missing = RecordId::new("missing");
        assert!(countries
            .update(&missing, values(json!({"name": "X"})))
            .await
            .is_err());
        assert_eq!(notifier.last().unwrap().title, "Failed to update country");

        assert!(countries.delete(&missing).await.is_err());
        assert_eq!(notifier.last().unwrap().title, "Failed to delete country");

        assert_eq!(countries.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_list_failure_is_not_cached_or_retried() {
        let (countries, client, _) = setup();
        client.fail_next_select("connection refused");

        let err = countries.list().await.unwrap_err();
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(client.select_calls(), 1);

        assert!(countries.list().await.unwrap().is_empty());
        assert_eq!(client.select_calls(), 2);
    }

    #[tokio::test]
    async fn test_list_active_and_values() {
        let (countries, _, _) = setup();
        countries.create(india()).await.unwrap();
        countries
            .create_new(
                NewRecord::new(
                    "fr",
                    CountryFields {
                        name: "France".into(),
                        region: None,
                    },
                )
                .inactive(),
            )
            .await
            .unwrap();

        let active = countries.list_active().await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label(), "India");

        let rows = countries.list_values().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.contains_key("id") && r.contains_key("is_active")));
    }
}
