use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use geo_types::Point;
use serde::{Deserialize, Serialize};

use crate::error::{malformed_field_error, Error};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TowerRecord {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub carrier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal_strength: Option<f64>,
    pub tower_type: TowerType,
    pub submitted_by: String,
    pub submitted_at: DateTime<Utc>,
    pub verified: bool,
}

/// The validated, user-supplied part of a tower record.
#[derive(Clone, Debug, PartialEq)]
pub struct NewTower {
    pub latitude: f64,
    pub longitude: f64,
    pub carrier: String,
    pub frequency: Option<f64>,
    pub signal_strength: Option<f64>,
    pub tower_type: TowerType,
    pub submitted_by: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerType {
    #[serde(rename = "GSM")]
    Gsm,
    #[serde(rename = "CDMA")]
    Cdma,
    #[serde(rename = "LTE")]
    Lte,
    #[serde(rename = "5G")]
    FiveG,
    #[default]
    Unknown,
}

impl TowerType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gsm => "GSM",
            Self::Cdma => "CDMA",
            Self::Lte => "LTE",
            Self::FiveG => "5G",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TowerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TowerType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "" | "UNKNOWN" => Ok(Self::Unknown),
            "GSM" => Ok(Self::Gsm),
            "CDMA" => Ok(Self::Cdma),
            "LTE" => Ok(Self::Lte),
            "5G" => Ok(Self::FiveG),
            _ => Err(malformed_field_error(
                "towerType",
                "must be one of GSM, CDMA, LTE, 5G, Unknown",
            )),
        }
    }
}

impl TowerRecord {
    pub fn new(id: String, tower: NewTower) -> Self {
        Self {
            id,
            latitude: tower.latitude,
            longitude: tower.longitude,
            carrier: tower.carrier,
            frequency: tower.frequency,
            signal_strength: tower.signal_strength,
            tower_type: tower.tower_type,
            submitted_by: tower.submitted_by,
            submitted_at: Utc::now(),
            verified: false,
        }
    }

    /// Whether this record carries exactly the user-supplied fields of `tower`.
    pub fn matches(&self, tower: &NewTower) -> bool {
        self.latitude == tower.latitude
            && self.longitude == tower.longitude
            && self.carrier == tower.carrier
            && self.frequency == tower.frequency
            && self.signal_strength == tower.signal_strength
            && self.tower_type == tower.tower_type
            && self.submitted_by == tower.submitted_by
    }

    /// Marker position, x = longitude and y = latitude.
    pub fn position(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}
