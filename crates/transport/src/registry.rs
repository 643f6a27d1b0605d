use std::sync::{Arc, Mutex, PoisonError};

use freightdesk_core::{DomainResult, Entity, TransportId};

use crate::{TimestampIds, Transport, TransportDraft};

/// Append-only store of validated transports.
pub trait TransportRegistry: Send + Sync {
    /// Validate `draft` and, if every rule passes, append it with a fresh id.
    ///
    /// On failure nothing is stored.
    fn register(&self, draft: &TransportDraft) -> DomainResult<Transport>;

    /// All stored transports in insertion order.
    fn list(&self) -> Vec<Transport>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<R> TransportRegistry for Arc<R>
where
    R: TransportRegistry + ?Sized,
{
    fn register(&self, draft: &TransportDraft) -> DomainResult<Transport> {
        (**self).register(draft)
    }

    fn list(&self) -> Vec<Transport> {
        (**self).list()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

#[derive(Debug, Default)]
struct Records {
    transports: Vec<Transport>,
    ids: TimestampIds,
}

/// In-memory registry for a single process.
///
/// One lock guards both the record sequence and the id sequence, so each
/// validate-assign-append runs atomically with respect to other callers.
#[derive(Debug, Default)]
pub struct InMemoryTransportRegistry {
    inner: Mutex<Records>,
}

impl InMemoryTransportRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransportRegistry for InMemoryTransportRegistry {
    fn register(&self, draft: &TransportDraft) -> DomainResult<Transport> {
        let valid = draft.validate().inspect_err(|e| {
            tracing::info!(reason = %e, "transport rejected");
        })?;

        let mut records = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let id = TransportId::new(records.ids.next());
        let transport = Transport::from_valid(id, valid);
        records.transports.push(transport.clone());

        tracing::info!(
            transport_id = %transport.id(),
            trip_number = %transport.trip_number,
            stored = records.transports.len(),
            "transport registered"
        );

        Ok(transport)
    }

    fn list(&self) -> Vec<Transport> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .transports
            .clone()
    }

    fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .transports
            .len()
    }
}
