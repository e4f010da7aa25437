//! Read-only view models derived from the tower collection.
//!
//! Nothing here mutates state; the engine hands these to whatever renders the
//! map, the side panel and the recent submissions list.

use geo_types::Point;
use serde::{Deserialize, Serialize};

use crate::entities::TowerRecord;

pub const DEFAULT_CENTER: (f64, f64) = (40.7128, -74.0060);
pub const DEFAULT_ZOOM: u8 = 3;

const VERIFIED: &str = "✓ Verified";
const PENDING: &str = "⏳ Pending Verification";
const POPUP_PENDING: &str = "⏳ Pending verification";

/// The last `limit` towers, newest first. Order follows submission, not timestamps.
pub fn recent(towers: &[TowerRecord], limit: usize) -> Vec<&TowerRecord> {
    towers.iter().rev().take(limit).collect()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum Panel {
    Details(TowerDetails),
    Recent(Vec<RecentEntry>),
}

impl Panel {
    pub fn for_selection(
        selected: Option<&TowerRecord>,
        towers: &[TowerRecord],
        limit: usize,
    ) -> Self {
        match selected {
            Some(tower) => Self::Details(TowerDetails::from(tower)),
            None => Self::Recent(
                recent(towers, limit)
                    .into_iter()
                    .map(RecentEntry::from)
                    .collect(),
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TowerDetails {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub location: String,
    pub frequency: Option<String>,
    pub signal_strength: Option<String>,
    pub submitted_by: String,
    pub submitted_on: String,
    pub status: String,
    pub verified: bool,
}

impl From<&TowerRecord> for TowerDetails {
    fn from(tower: &TowerRecord) -> Self {
        Self {
            id: tower.id.clone(),
            title: tower.carrier.clone(),
            subtitle: format!("{} Tower", tower.tower_type),
            location: format!("{:.6}, {:.6}", tower.latitude, tower.longitude),
            frequency: tower.frequency.map(format_frequency),
            signal_strength: tower.signal_strength.map(format_signal),
            submitted_by: tower.submitted_by.clone(),
            submitted_on: tower.submitted_at.format("%Y-%m-%d").to_string(),
            status: status(tower.verified).into(),
            verified: tower.verified,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentEntry {
    pub id: String,
    pub carrier: String,
    pub summary: String,
}

impl From<&TowerRecord> for RecentEntry {
    fn from(tower: &TowerRecord) -> Self {
        Self {
            id: tower.id.clone(),
            carrier: tower.carrier.clone(),
            summary: format!("{} • {}", tower.tower_type, tower.submitted_by),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub id: String,
    pub position: Point<f64>,
    pub title: String,
    pub popup: Vec<String>,
}

impl From<&TowerRecord> for Marker {
    fn from(tower: &TowerRecord) -> Self {
        let mut popup = vec![
            format!("Type: {}", tower.tower_type),
            format!("Location: {:.4}, {:.4}", tower.latitude, tower.longitude),
        ];
        if let Some(frequency) = tower.frequency {
            popup.push(format!("Frequency: {}", format_frequency(frequency)));
        }
        if let Some(signal) = tower.signal_strength {
            popup.push(format!("Signal: {}", format_signal(signal)));
        }
        popup.push(format!("Submitted by: {}", tower.submitted_by));
        popup.push(popup_status(tower.verified).into());

        Self {
            id: tower.id.clone(),
            position: tower.position(),
            title: format!("{} Tower", tower.carrier),
            popup,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    pub center: Point<f64>,
    pub zoom: u8,
    pub markers: Vec<Marker>,
    pub summary: String,
}

impl MapView {
    pub fn new(towers: &[TowerRecord]) -> Self {
        let (lat, lon) = DEFAULT_CENTER;

        Self {
            center: Point::new(lon, lat),
            zoom: DEFAULT_ZOOM,
            markers: towers.iter().map(Marker::from).collect(),
            summary: format!("{} towers mapped", towers.len()),
        }
    }
}

fn format_frequency(mhz: f64) -> String {
    format!("{} MHz", mhz)
}

fn format_signal(dbm: f64) -> String {
    format!("{} dBm", dbm)
}

fn status(verified: bool) -> &'static str {
    if verified {
        VERIFIED
    } else {
        PENDING
    }
}

// the map popup spells it in sentence case
fn popup_status(verified: bool) -> &'static str {
    if verified {
        VERIFIED
    } else {
        POPUP_PENDING
    }
}
