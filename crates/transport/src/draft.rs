//! Candidate transport payloads and the rules they must pass.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use freightdesk_core::{DomainError, DomainResult};

pub const TRIP_NUMBER: &str = "numeroViaje";
pub const ORIGIN: &str = "origen";
pub const DESTINATION: &str = "destino";
pub const CARRIER: &str = "transportista";
pub const AGREED_TARIFF: &str = "tarifaAcordada";
pub const DEPARTURE_DATE: &str = "fechaSalida";
pub const DELIVERY_DATE: &str = "fechaEntrega";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A transport as submitted by a caller, before any rule has been checked.
///
/// Every field is an arbitrary JSON value: callers may omit fields, send
/// `null`, or send the tariff as either a number or a numeric string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportDraft {
    #[serde(rename = "numeroViaje")]
    pub trip_number: Option<Value>,
    #[serde(rename = "origen")]
    pub origin: Option<Value>,
    #[serde(rename = "destino")]
    pub destination: Option<Value>,
    #[serde(rename = "transportista")]
    pub carrier: Option<Value>,
    #[serde(rename = "tarifaAcordada")]
    pub agreed_tariff: Option<Value>,
    #[serde(rename = "fechaSalida")]
    pub departure_date: Option<Value>,
    #[serde(rename = "fechaEntrega")]
    pub delivery_date: Option<Value>,
}

/// Field values that passed every rule, coerced to their stored types.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidTransport {
    pub trip_number: String,
    pub origin: String,
    pub destination: String,
    pub carrier: String,
    pub agreed_tariff: f64,
    pub departure_date: NaiveDate,
    pub delivery_date: NaiveDate,
}

impl TransportDraft {
    /// Run the validation rules in order and stop at the first one that fails:
    ///
    /// 1. every field present and non-empty
    /// 2. delivery date strictly after departure date
    /// 3. agreed tariff strictly positive
    pub fn validate(&self) -> DomainResult<ValidTransport> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(DomainError::validation(format!(
                "all fields are required (missing: {})",
                missing.join(", ")
            )));
        }

        let trip_number = text(TRIP_NUMBER, &self.trip_number)?;
        let origin = text(ORIGIN, &self.origin)?;
        let destination = text(DESTINATION, &self.destination)?;
        let carrier = text(CARRIER, &self.carrier)?;

        let departure_date = date(DEPARTURE_DATE, &self.departure_date)?;
        let delivery_date = date(DELIVERY_DATE, &self.delivery_date)?;
        if delivery_date <= departure_date {
            return Err(DomainError::validation(
                "delivery date must be after departure date",
            ));
        }

        let agreed_tariff = tariff(&self.agreed_tariff)?;

        Ok(ValidTransport {
            trip_number,
            origin,
            destination,
            carrier,
            agreed_tariff,
            departure_date,
            delivery_date,
        })
    }

    /// Wire names of the fields that are absent or empty, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            (TRIP_NUMBER, self.trip_number.as_ref()),
            (ORIGIN, self.origin.as_ref()),
            (DESTINATION, self.destination.as_ref()),
            (CARRIER, self.carrier.as_ref()),
            (AGREED_TARIFF, self.agreed_tariff.as_ref()),
            (DEPARTURE_DATE, self.departure_date.as_ref()),
            (DELIVERY_DATE, self.delivery_date.as_ref()),
        ]
        .into_iter()
        .filter(|(_, value)| !is_present(*value))
        .map(|(name, _)| name)
        .collect()
    }
}

/// Absent, `null`, `""`, `0` and `false` all count as missing.
fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

fn text(field: &str, value: &Option<Value>) -> DomainResult<String> {
    match value {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(DomainError::validation(format!("{field} must be a string"))),
    }
}

fn date(field: &str, value: &Option<Value>) -> DomainResult<NaiveDate> {
    let raw = match value {
        Some(Value::String(s)) => s,
        _ => {
            return Err(DomainError::validation(format!(
                "{field} must be a date (YYYY-MM-DD)"
            )));
        }
    };

    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| DomainError::validation(format!("{field} must be a date (YYYY-MM-DD)")))
}

fn tariff(value: &Option<Value>) -> DomainResult<f64> {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(t) if t.is_finite() && t > 0.0 => Ok(t),
        _ => Err(DomainError::validation(
            "agreed tariff must be a positive number",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "numeroViaje": "T1",
            "origen": "A",
            "destino": "B",
            "transportista": "Acme",
            "tarifaAcordada": "150.5",
            "fechaSalida": "2024-01-01",
            "fechaEntrega": "2024-01-05",
        })
    }

    fn draft(payload: Value) -> TransportDraft {
        serde_json::from_value(payload).unwrap()
    }

    fn with(field: &str, value: Value) -> TransportDraft {
        let mut payload = valid_payload();
        payload[field] = value;
        draft(payload)
    }

    fn reason(d: &TransportDraft) -> String {
        match d.validate().unwrap_err() {
            DomainError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn valid_payload_is_coerced() {
        let valid = draft(valid_payload()).validate().unwrap();
        assert_eq!(valid.trip_number, "T1");
        assert_eq!(valid.carrier, "Acme");
        assert_eq!(valid.agreed_tariff, 150.5);
        assert_eq!(valid.departure_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(valid.delivery_date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    }

    #[test]
    fn numeric_tariff_is_accepted() {
        let valid = with(AGREED_TARIFF, json!(99)).validate().unwrap();
        assert_eq!(valid.agreed_tariff, 99.0);
    }

    #[test]
    fn text_fields_are_kept_verbatim() {
        let valid = with(ORIGIN, json!("  Puerto de Valencia ")).validate().unwrap();
        assert_eq!(valid.origin, "  Puerto de Valencia ");
    }

    #[test]
    fn empty_payload_lists_every_field() {
        let d = TransportDraft::default();
        assert_eq!(d.missing_fields().len(), 7);
        assert!(reason(&d).starts_with("all fields are required"));
    }

    #[test]
    fn falsy_values_count_as_missing() {
        for value in [json!(null), json!(""), json!(0), json!(false)] {
            let d = with(AGREED_TARIFF, value.clone());
            assert_eq!(d.missing_fields(), vec![AGREED_TARIFF], "value {value}");
        }
        assert_eq!(with(CARRIER, json!("")).missing_fields(), vec![CARRIER]);
    }

    #[test]
    fn presence_is_checked_before_dates() {
        let mut payload = valid_payload();
        payload["fechaEntrega"] = json!("2023-01-01");
        payload.as_object_mut().unwrap().remove("destino");
        let msg = reason(&draft(payload));
        assert!(msg.contains("destino"), "{msg}");
    }

    #[test]
    fn dates_are_checked_before_tariff() {
        let mut payload = valid_payload();
        payload["fechaEntrega"] = json!("2023-12-31");
        payload["tarifaAcordada"] = json!(-5);
        assert_eq!(
            reason(&draft(payload)),
            "delivery date must be after departure date"
        );
    }

    #[test]
    fn same_day_delivery_is_rejected() {
        let d = with(DELIVERY_DATE, json!("2024-01-01"));
        assert_eq!(reason(&d), "delivery date must be after departure date");
    }

    #[test]
    fn unparsable_date_is_rejected() {
        let d = with(DEPARTURE_DATE, json!("next tuesday"));
        assert!(reason(&d).contains(DEPARTURE_DATE));

        let d = with(DELIVERY_DATE, json!(20240105));
        assert!(reason(&d).contains(DELIVERY_DATE));
    }

    #[test]
    fn non_positive_or_non_numeric_tariff_is_rejected() {
        for value in [json!(-1), json!("-0.01"), json!("0"), json!("abc"), json!("inf"), json!("NaN")] {
            let d = with(AGREED_TARIFF, value.clone());
            assert_eq!(
                reason(&d),
                "agreed tariff must be a positive number",
                "value {value}"
            );
        }
    }

    #[test]
    fn non_string_text_field_is_rejected() {
        let d = with(TRIP_NUMBER, json!(42));
        assert_eq!(reason(&d), "numeroViaje must be a string");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let mut payload = valid_payload();
        payload["observaciones"] = json!("fragile");
        assert!(draft(payload).validate().is_ok());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the date rule accepts exactly the strictly-later deliveries.
        #[test]
        fn delivery_must_be_strictly_after_departure(
            departure_offset in 0i64..3650,
            delta in -30i64..30,
        ) {
            let base = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
            let departure = base + chrono::Duration::days(departure_offset);
            let delivery = departure + chrono::Duration::days(delta);

            let mut payload = valid_payload();
            payload["fechaSalida"] = json!(departure.format("%Y-%m-%d").to_string());
            payload["fechaEntrega"] = json!(delivery.format("%Y-%m-%d").to_string());

            prop_assert_eq!(draft(payload).validate().is_ok(), delta > 0);
        }

        /// Property: the tariff rule accepts exactly the strictly positive amounts.
        #[test]
        fn tariff_must_be_strictly_positive(tariff in -1_000_000.0f64..1_000_000.0f64) {
            prop_assume!(tariff != 0.0);
            let d = with(AGREED_TARIFF, json!(tariff.to_string()));
            prop_assert_eq!(d.validate().is_ok(), tariff > 0.0);
        }
    }
}
