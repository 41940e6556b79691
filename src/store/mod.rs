pub mod file;
pub mod memory;

use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::Result;
use crate::models::Event;

pub use file::FileStorage;
pub use memory::MemoryStorage;

pub const DEFAULT_STORAGE_KEY: &str = "events";

pub trait Storage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    fn remove_item(&self, key: &str) -> Result<()>;
}

#[derive(Clone)]
pub struct RecordStore {
    storage: Arc<dyn Storage>,
    key: String,
}

impl RecordStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: Arc<dyn Storage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn load(&self) -> Vec<Event> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("Failed to read '{}' from storage: {}", self.key, err);
                return Vec::new();
            }
        };

        let records = match serde_json::from_str::<Option<Vec<serde_json::Value>>>(&raw) {
            Ok(records) => records.unwrap_or_default(),
            Err(err) => {
                warn!("Ignoring malformed '{}' collection: {}", self.key, err);
                return Vec::new();
            }
        };

        let total = records.len();
        let events: Vec<Event> = records
            .into_iter()
            .filter_map(|record| match serde_json::from_value::<Event>(record) {
                Ok(event) => Some(event),
                Err(err) => {
                    debug!("Skipping unreadable record in '{}': {}", self.key, err);
                    None
                }
            })
            .collect();

        if events.len() < total {
            warn!(
                "Dropped {} of {} record(s) in '{}' that could not be read",
                total - events.len(),
                total,
                self.key
            );
        }

        events
    }

    pub fn save(&self, events: &[Event]) -> Result<()> {
        let raw = serde_json::to_string(events)?;
        self.storage.set_item(&self.key, &raw)?;

        debug!("Saved {} event(s) under '{}'", events.len(), self.key);
        Ok(())
    }
}
