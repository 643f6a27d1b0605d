use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use freightdesk_core::{Entity, TransportId};

use crate::ValidTransport;

/// A stored freight shipment.
///
/// Field names on the wire follow the public API (`numeroViaje`, `origen`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transport {
    pub id: TransportId,
    #[serde(rename = "numeroViaje")]
    pub trip_number: String,
    #[serde(rename = "origen")]
    pub origin: String,
    #[serde(rename = "destino")]
    pub destination: String,
    #[serde(rename = "transportista")]
    pub carrier: String,
    #[serde(rename = "tarifaAcordada")]
    pub agreed_tariff: f64,
    #[serde(rename = "fechaSalida")]
    pub departure_date: NaiveDate,
    #[serde(rename = "fechaEntrega")]
    pub delivery_date: NaiveDate,
}

impl Transport {
    pub(crate) fn from_valid(id: TransportId, valid: ValidTransport) -> Self {
        Self {
            id,
            trip_number: valid.trip_number,
            origin: valid.origin,
            destination: valid.destination,
            carrier: valid.carrier,
            agreed_tariff: valid.agreed_tariff,
            departure_date: valid.departure_date,
            delivery_date: valid.delivery_date,
        }
    }
}

impl Entity for Transport {
    type Id = TransportId;

    fn id(&self) -> TransportId {
        self.id
    }
}
