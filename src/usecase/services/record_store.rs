use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::entities::record::{DomainRecord, RecordFields, RecordId};
use crate::usecase::ports::storage::{KeyValueStorage, StorageError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to save domains: {0}")]
    Persist(#[from] StorageError),
}

/// The in-memory record collection and its persisted mirror. Every mutation
/// rewrites the whole document under `key`.
pub struct RecordStore {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
    records: Vec<DomainRecord>,
}

impl RecordStore {
    /// Reads the persisted collection. A missing key, a failed read or a
    /// document that does not parse all start the store empty.
    pub fn load(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        let key = key.into();
        let records = match storage.get(&key) {
            Ok(Some(document)) => match serde_json::from_str::<Vec<DomainRecord>>(&document) {
                Ok(records) => records,
                Err(err) => {
                    warn!(%key, error = %err, "stored domains are unreadable, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(%key, error = %err, "failed to read stored domains, starting empty");
                Vec::new()
            }
        };
        info!(%key, count = records.len(), "loaded domains");

        Self {
            storage,
            key,
            records,
        }
    }

    pub fn records(&self) -> &[DomainRecord] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&DomainRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn total_buy_price(&self) -> f64 {
        self.records
            .iter()
            .map(|record| record.buy_price)
            .filter(|price| price.is_finite())
            .sum()
    }

    pub fn persist(&self) -> Result<(), StoreError> {
        let document = serde_json::to_string(&self.records).map_err(StorageError::from)?;
        self.storage.set(&self.key, &document).map_err(|err| {
            warn!(key = %self.key, error = %err, "failed to persist domains");
            StoreError::from(err)
        })?;
        debug!(key = %self.key, count = self.records.len(), "persisted domains");
        Ok(())
    }

    pub fn add(&mut self, fields: RecordFields) -> Result<RecordId, StoreError> {
        let record = DomainRecord::new(fields);
        let id = record.id;
        self.records.push(record);
        self.persist()?;
        Ok(id)
    }

    /// Returns `false` without persisting when `id` is unknown.
    pub fn update(&mut self, id: RecordId, fields: RecordFields) -> Result<bool, StoreError> {
        let Some(record) = self.records.iter_mut().find(|record| record.id == id) else {
            return Ok(false);
        };
        record.apply(fields);
        self.persist()?;
        Ok(true)
    }

    /// Returns `false` without persisting when `id` is unknown.
    pub fn remove(&mut self, id: RecordId) -> Result<bool, StoreError> {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        if self.records.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Appends all records, then persists once.
    pub fn add_batch(&mut self, records: Vec<DomainRecord>) -> Result<usize, StoreError> {
        let added = records.len();
        if added == 0 {
            return Ok(0);
        }
        self.records.extend(records);
        self.persist()?;
        info!(added, total = self.records.len(), "appended domain batch");
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::MemoryStorage;

    const KEY: &str = "domains";

    fn fields(item: &str, buy_price: f64) -> RecordFields {
        RecordFields {
            item: item.to_string(),
            provider: "NameCo".to_string(),
            buy_price,
            bought_date: "2023-01-01".to_string(),
            ..RecordFields::default()
        }
    }

    fn stored(storage: &MemoryStorage) -> Vec<DomainRecord> {
        let document = storage
            .get(KEY)
            .expect("memory get should succeed")
            .expect("document should be stored");
        serde_json::from_str(&document).expect("stored document should parse")
    }

    #[test]
    fn load_without_document_starts_empty() {
        let store = RecordStore::load(Arc::new(MemoryStorage::default()), KEY);
        assert_eq!(store.count(), 0);
        assert_eq!(store.total_buy_price(), 0.0);
    }

    #[test]
    fn load_with_corrupt_document_fails_open() {
        let storage = Arc::new(MemoryStorage::default());
        storage.set(KEY, "{not json").expect("memory set should succeed");

        let store = RecordStore::load(storage, KEY);

        assert!(store.records().is_empty());
    }

    #[test]
    fn every_mutation_round_trips_through_storage() {
        let storage = Arc::new(MemoryStorage::default());
        let mut store = RecordStore::load(storage.clone(), KEY);

        let first = store.add(fields("a.com", 10.0)).expect("add should succeed");
        assert_eq!(stored(&storage), store.records());

        let second = store.add(fields("b.com", 2.5)).expect("add should succeed");
        assert_eq!(stored(&storage), store.records());

        let updated = store
            .update(first, fields("renamed.com", 4.0))
            .expect("update should succeed");
        assert!(updated);
        assert_eq!(stored(&storage), store.records());
        assert_eq!(store.get(first).map(|r| r.item.as_str()), Some("renamed.com"));

        let removed = store.remove(second).expect("remove should succeed");
        assert!(removed);
        assert_eq!(stored(&storage), store.records());

        let reloaded = RecordStore::load(storage, KEY);
        assert_eq!(reloaded.records(), store.records());
    }

    #[test]
    fn unknown_ids_are_no_ops() {
        let storage = Arc::new(MemoryStorage::default());
        let mut store = RecordStore::load(storage.clone(), KEY);
        store.add(fields("keep.com", 3.0)).expect("add should succeed");
        let writes_before = storage.write_count();
        let snapshot = store.records().to_vec();

        let missing = RecordId::generate();
        assert!(!store.remove(missing).expect("remove should succeed"));
        assert!(!store
            .update(missing, fields("ghost.com", 1.0))
            .expect("update should succeed"));

        assert_eq!(store.records(), snapshot.as_slice());
        assert_eq!(storage.write_count(), writes_before, "no-ops must not persist");
        assert_eq!(store.count(), 1);
        assert_eq!(store.total_buy_price(), 3.0);
    }

    #[test]
    fn aggregates_follow_add_and_remove() {
        let mut store = RecordStore::load(Arc::new(MemoryStorage::default()), KEY);
        let a = store.add(fields("a.com", 10.0)).expect("add should succeed");
        store.add(fields("b.com", 12.5)).expect("add should succeed");
        store.add(fields("c.com", 0.0)).expect("add should succeed");

        assert_eq!(store.count(), 3);
        assert_eq!(store.total_buy_price(), 22.5);

        store.remove(a).expect("remove should succeed");
        assert_eq!(store.count(), 2);
        assert_eq!(store.total_buy_price(), 12.5);
    }

    #[test]
    fn non_numeric_stored_prices_count_as_zero() {
        let storage = Arc::new(MemoryStorage::default());
        let document = format!(
            r#"[{{"id":"{}","item":"a.com","provider":"P","buyPrice":"abc","boughtDate":"","forSale":false,"sellingPrice":null,"soldDate":null}},
                {{"id":"{}","item":"b.com","provider":"P","buyPrice":7,"boughtDate":"","forSale":false,"sellingPrice":null,"soldDate":null}},
                {{"id":"{}","item":"c.com","provider":"P","buyPrice":"3.5","boughtDate":"","forSale":false}}]"#,
            RecordId::generate(),
            RecordId::generate(),
            RecordId::generate()
        );
        storage.set(KEY, &document).expect("memory set should succeed");

        let store = RecordStore::load(storage, KEY);

        assert_eq!(store.count(), 3);
        assert_eq!(store.total_buy_price(), 10.5);
    }

    #[test]
    fn add_batch_persists_once_and_keeps_order() {
        let storage = Arc::new(MemoryStorage::default());
        let mut store = RecordStore::load(storage.clone(), KEY);
        store.add(fields("existing.com", 1.0)).expect("add should succeed");
        let writes_before = storage.write_count();

        let batch = vec![
            DomainRecord::new(fields("one.com", 1.0)),
            DomainRecord::new(fields("two.com", 2.0)),
        ];
        let added = store.add_batch(batch).expect("batch should succeed");

        assert_eq!(added, 2);
        assert_eq!(storage.write_count(), writes_before + 1);
        let names: Vec<&str> = store.records().iter().map(|r| r.item.as_str()).collect();
        assert_eq!(names, vec!["existing.com", "one.com", "two.com"]);
        assert_eq!(stored(&storage), store.records());

        assert_eq!(store.add_batch(Vec::new()).expect("empty batch should succeed"), 0);
        assert_eq!(storage.write_count(), writes_before + 1);
    }

    #[test]
    fn failed_persist_keeps_in_memory_mutation() {
        let storage = Arc::new(MemoryStorage::failing_writes());
        let mut store = RecordStore::load(storage, KEY);

        let err = store
            .add(fields("a.com", 1.0))
            .expect_err("persist should fail");

        assert!(err.to_string().contains("failed to save domains"), "unexpected error: {err}");
        assert_eq!(store.count(), 1);
    }
}
