use chrono::{DateTime, Utc};

use crate::entities::{TowerRecord, TowerType};
use crate::error::Error;

struct Example {
    id: &'static str,
    latitude: f64,
    longitude: f64,
    carrier: &'static str,
    frequency: f64,
    signal_strength: f64,
    tower_type: TowerType,
    submitted_by: &'static str,
    submitted_at: &'static str,
    verified: bool,
}

const EXAMPLES: [Example; 6] = [
    Example {
        id: "1",
        latitude: 40.7128,
        longitude: -74.0060,
        carrier: "Verizon",
        frequency: 1900.0,
        signal_strength: -85.0,
        tower_type: TowerType::FiveG,
        submitted_by: "nyc_radio_guy",
        submitted_at: "2024-01-15T00:00:00Z",
        verified: true,
    },
    Example {
        id: "2",
        latitude: 34.0522,
        longitude: -118.2437,
        carrier: "T-Mobile",
        frequency: 2100.0,
        signal_strength: -78.0,
        tower_type: TowerType::Lte,
        submitted_by: "la_scanner",
        submitted_at: "2024-01-14T00:00:00Z",
        verified: true,
    },
    Example {
        id: "3",
        latitude: 41.8781,
        longitude: -87.6298,
        carrier: "AT&T",
        frequency: 850.0,
        signal_strength: -92.0,
        tower_type: TowerType::Lte,
        submitted_by: "chicago_mapper",
        submitted_at: "2024-01-13T00:00:00Z",
        verified: false,
    },
    Example {
        id: "4",
        latitude: 51.5074,
        longitude: -0.1278,
        carrier: "EE",
        frequency: 2600.0,
        signal_strength: -80.0,
        tower_type: TowerType::FiveG,
        submitted_by: "london_tech",
        submitted_at: "2024-01-12T00:00:00Z",
        verified: true,
    },
    Example {
        id: "5",
        latitude: 35.6762,
        longitude: 139.6503,
        carrier: "NTT DoCoMo",
        frequency: 3500.0,
        signal_strength: -75.0,
        tower_type: TowerType::FiveG,
        submitted_by: "tokyo_rf",
        submitted_at: "2024-01-11T00:00:00Z",
        verified: true,
    },
    Example {
        id: "6",
        latitude: -33.8688,
        longitude: 151.2093,
        carrier: "Telstra",
        frequency: 1800.0,
        signal_strength: -88.0,
        tower_type: TowerType::Lte,
        submitted_by: "sydney_explorer",
        submitted_at: "2024-01-10T00:00:00Z",
        verified: false,
    },
];

/// Demonstration towers a fresh local session starts with.
pub fn example_towers() -> Result<Vec<TowerRecord>, Error> {
    EXAMPLES
        .iter()
        .map(|e| -> Result<TowerRecord, Error> {
            Ok(TowerRecord {
                id: e.id.into(),
                latitude: e.latitude,
                longitude: e.longitude,
                carrier: e.carrier.into(),
                frequency: Some(e.frequency),
                signal_strength: Some(e.signal_strength),
                tower_type: e.tower_type,
                submitted_by: e.submitted_by.into(),
                submitted_at: e.submitted_at.parse::<DateTime<Utc>>()?,
                verified: e.verified,
            })
        })
        .collect()
}
