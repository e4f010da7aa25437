use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::entities::{NewTower, TowerType};
use crate::error::{malformed_field_error, missing_field_error, Error};

/// Raw form input. Every field arrives as text and may be empty.
///
/// Numbers are accepted too, so a serialized `TowerRecord` is a valid payload.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TowerPayload {
    /// Client-chosen id, used to make retried submissions idempotent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub latitude: String,
    #[serde(deserialize_with = "text_or_number")]
    pub longitude: String,
    #[serde(deserialize_with = "text_or_number")]
    pub carrier: String,
    #[serde(deserialize_with = "text_or_number")]
    pub frequency: String,
    #[serde(deserialize_with = "text_or_number")]
    pub signal_strength: String,
    #[serde(deserialize_with = "text_or_number")]
    pub tower_type: String,
    #[serde(deserialize_with = "text_or_number")]
    pub submitted_by: String,
}

impl TowerPayload {
    /// Checks fields in form order and reports the first failure.
    pub fn validate(&self) -> Result<NewTower, Error> {
        let latitude = required_number("latitude", &self.latitude)?;
        let longitude = required_number("longitude", &self.longitude)?;
        let carrier = required_text("carrier", &self.carrier)?;
        let tower_type: TowerType = self.tower_type.parse()?;

        let frequency = optional_number("frequency", &self.frequency)?;
        if let Some(frequency) = frequency {
            if frequency <= 0.0 {
                return Err(malformed_field_error("frequency", "must be positive"));
            }
        }

        let signal_strength = optional_number("signalStrength", &self.signal_strength)?;
        let submitted_by = required_text("submittedBy", &self.submitted_by)?;

        Ok(NewTower {
            latitude,
            longitude,
            carrier,
            frequency,
            signal_strength,
            tower_type,
            submitted_by,
        })
    }

    pub fn client_id(&self) -> Option<&str> {
        self.id.as_deref().map(str::trim).filter(|id| !id.is_empty())
    }
}

fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        other => Err(de::Error::custom(format!(
            "expected text or a number, got {}",
            other
        ))),
    }
}

fn required_text(field: &str, value: &str) -> Result<String, Error> {
    let value = value.trim();
    if value.is_empty() {
        return Err(missing_field_error(field));
    }

    Ok(value.to_string())
}

fn required_number(field: &str, value: &str) -> Result<f64, Error> {
    optional_number(field, value)?.ok_or_else(|| missing_field_error(field))
}

fn optional_number(field: &str, value: &str) -> Result<Option<f64>, Error> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(Some(number)),
        _ => Err(malformed_field_error(field, "must be a finite number")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> TowerPayload {
        TowerPayload {
            latitude: "10".into(),
            longitude: "20".into(),
            carrier: "X".into(),
            tower_type: "LTE".into(),
            submitted_by: "y".into(),
            ..Default::default()
        }
    }

    #[test]
    fn minimal_payload() {
        let tower = payload().validate().unwrap();

        assert_eq!(tower.latitude, 10.0);
        assert_eq!(tower.longitude, 20.0);
        assert_eq!(tower.tower_type, TowerType::Lte);
        assert_eq!(tower.frequency, None);
        assert_eq!(tower.signal_strength, None);
    }

    #[test]
    fn empty_latitude_is_missing() {
        let err = TowerPayload {
            latitude: "".into(),
            ..payload()
        }
        .validate()
        .unwrap_err();

        assert_eq!(err.code, 102);
        assert!(err.message.contains("latitude"));
    }

    #[test]
    fn garbage_longitude_is_rejected() {
        let err = TowerPayload {
            longitude: "east-ish".into(),
            ..payload()
        }
        .validate()
        .unwrap_err();

        assert_eq!(err.code, 103);
        assert!(err.message.starts_with("longitude"));
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        for value in ["NaN", "inf", "-infinity"] {
            let err = TowerPayload {
                latitude: value.into(),
                ..payload()
            }
            .validate()
            .unwrap_err();

            assert!(err.is_validation(), "{} accepted", value);
        }
    }

    #[test]
    fn zero_signal_is_present() {
        let tower = TowerPayload {
            signal_strength: "0".into(),
            ..payload()
        }
        .validate()
        .unwrap();

        assert_eq!(tower.signal_strength, Some(0.0));
    }

    #[test]
    fn frequency_must_be_positive() {
        let err = TowerPayload {
            frequency: "0".into(),
            ..payload()
        }
        .validate()
        .unwrap_err();
        assert!(err.message.starts_with("frequency"));

        let tower = TowerPayload {
            frequency: " 1900 ".into(),
            ..payload()
        }
        .validate()
        .unwrap();
        assert_eq!(tower.frequency, Some(1900.0));
    }

    #[test]
    fn blank_text_fields_are_missing() {
        let err = TowerPayload {
            carrier: "   ".into(),
            ..payload()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.message, "carrier is required");

        let err = TowerPayload {
            submitted_by: "".into(),
            ..payload()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.message, "submittedBy is required");
    }

    #[test]
    fn tower_type_defaults_to_unknown() {
        let tower = TowerPayload {
            tower_type: "".into(),
            ..payload()
        }
        .validate()
        .unwrap();

        assert_eq!(tower.tower_type, TowerType::Unknown);
    }

    #[test]
    fn out_of_range_coordinates_are_accepted() {
        let tower = TowerPayload {
            latitude: "123.5".into(),
            longitude: "-400".into(),
            ..payload()
        }
        .validate()
        .unwrap();

        assert_eq!(tower.latitude, 123.5);
    }

    #[test]
    fn deserializes_partial_form() {
        let payload: TowerPayload =
            serde_json::from_str(r#"{"latitude":"1","signalStrength":"-85"}"#).unwrap();

        assert_eq!(payload.signal_strength, "-85");
        assert_eq!(payload.carrier, "");
        assert_eq!(payload.client_id(), None);
    }

    #[test]
    fn accepts_a_serialized_record() {
        let payload: TowerPayload = serde_json::from_str(
            r#"{"id":"abc","latitude":10.5,"longitude":-20,"carrier":"X","signalStrength":0,
                "towerType":"5G","submittedBy":"y","submittedAt":"2024-01-15T00:00:00Z","verified":false}"#,
        )
        .unwrap();

        assert_eq!(payload.client_id(), Some("abc"));
        let tower = payload.validate().unwrap();
        assert_eq!(tower.latitude, 10.5);
        assert_eq!(tower.longitude, -20.0);
        assert_eq!(tower.signal_strength, Some(0.0));
        assert_eq!(tower.frequency, None);
        assert_eq!(tower.tower_type, TowerType::FiveG);
    }

    #[test]
    fn null_fields_are_empty() {
        let payload: TowerPayload = serde_json::from_str(r#"{"frequency":null}"#).unwrap();

        assert_eq!(payload.frequency, "");
    }
}
