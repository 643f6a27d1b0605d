//! Process-wide state shared by every handler.

use std::sync::{Arc, Mutex, PoisonError};

use serde_json::{Map, Value};

use freightdesk_auth::AccountDirectory;
use freightdesk_core::{DomainError, DomainResult};
use freightdesk_transport::{InMemoryTransportRegistry, TimestampIds, TransportRegistry};

pub struct AppServices {
    pub accounts: AccountDirectory,
    pub transports: Arc<dyn TransportRegistry>,
    pub items: ItemStore,
}

impl AppServices {
    pub fn new(accounts: AccountDirectory, transports: Arc<dyn TransportRegistry>) -> Self {
        Self {
            accounts,
            transports,
            items: ItemStore::new(),
        }
    }

    /// Seeded accounts, empty transport registry, empty item collection.
    pub fn in_memory() -> Self {
        Self::new(
            AccountDirectory::seeded(),
            Arc::new(InMemoryTransportRegistry::new()),
        )
    }
}

#[derive(Debug, Default)]
struct Items {
    docs: Vec<Map<String, Value>>,
    ids: TimestampIds,
}

/// Opaque JSON documents keyed by an assigned numeric `id`.
///
/// No rules are applied to the content; the store only numbers and keeps
/// what it is given.
#[derive(Debug, Default)]
pub struct ItemStore {
    inner: Mutex<Items>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `doc`, overwriting any caller-supplied `id` with a fresh one.
    pub fn insert(&self, mut doc: Map<String, Value>) -> Map<String, Value> {
        let mut items = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let id = items.ids.next();
        doc.insert("id".to_string(), Value::from(id));
        items.docs.push(doc.clone());
        doc
    }

    pub fn list(&self) -> Vec<Map<String, Value>> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .docs
            .clone()
    }

    pub fn get(&self, id: u64) -> DomainResult<Map<String, Value>> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .docs
            .iter()
            .find(|doc| doc.get("id").and_then(Value::as_u64) == Some(id))
            .cloned()
            .ok_or_else(|| DomainError::not_found("item"))
    }
}
