//! `freightdesk-transport` — freight shipment records: validation and storage.
//!
//! A [`TransportDraft`] is whatever the caller submitted. It only becomes a
//! [`Transport`] by passing [`TransportDraft::validate`], and only a
//! [`TransportRegistry`] hands out ids, so the store never holds an invalid
//! record.

pub mod draft;
pub mod ids;
pub mod registry;
pub mod transport;

pub use draft::{TransportDraft, ValidTransport};
pub use ids::TimestampIds;
pub use registry::{InMemoryTransportRegistry, TransportRegistry};
pub use transport::Transport;
