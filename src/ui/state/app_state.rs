use std::sync::Arc;

use dioxus::prelude::*;
use tracing::warn;

use crate::config::AppConfig;
use crate::domain::entities::draft::RecordDraft;
use crate::domain::entities::record::RecordId;
use crate::infra::memory::MemoryStorage;
use crate::infra::sqlite::kv::SqliteStorage;
use crate::usecase::ports::storage::KeyValueStorage;
use crate::usecase::services::record_store::RecordStore;

pub struct AppState {
    pub store: Signal<RecordStore>,
    pub form_open: Signal<bool>,
    pub editing_id: Signal<Option<RecordId>>,
    pub draft: Signal<RecordDraft>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let (storage, startup_warning) = use_hook(|| open_storage(config));
        let storage_key = config.storage_key.clone();
        let store = use_signal(move || RecordStore::load(storage, storage_key));

        Self {
            store,
            form_open: use_signal(|| false),
            editing_id: use_signal(|| None::<RecordId>),
            draft: use_signal(RecordDraft::default),
            busy: use_signal(|| false),
            status: use_signal(move || {
                startup_warning
                    .unwrap_or_else(|| format!("Loaded {} domains", store.peek().count()))
            }),
        }
    }
}

/// Opens the on-disk storage. When the database cannot be opened the window
/// still works against process memory, and the returned warning says so.
pub fn open_storage(config: &AppConfig) -> (Arc<dyn KeyValueStorage>, Option<String>) {
    match SqliteStorage::open(&config.db_path) {
        Ok(storage) => {
            let storage: Arc<dyn KeyValueStorage> = Arc::new(storage);
            (storage, None)
        }
        Err(err) => {
            warn!(error = %format!("{err:#}"), "falling back to in-memory storage");
            let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::default());
            (
                storage,
                Some(format!(
                    "Database unavailable, changes will not be saved: {err:#}"
                )),
            )
        }
    }
}
