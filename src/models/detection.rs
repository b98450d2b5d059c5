//! Detection model

use serde::{Deserialize, Serialize};

/// Waste categories recognized by the upstream classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WasteClass {
    Plastic,
    Organic,
    Metal,
    Glass,
    Paper,
}

impl WasteClass {
    pub const LABELS: [&'static str; 5] = ["plastic", "organic", "metal", "glass", "paper"];

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "plastic" => Some(Self::Plastic),
            "organic" => Some(Self::Organic),
            "metal" => Some(Self::Metal),
            "glass" => Some(Self::Glass),
            "paper" => Some(Self::Paper),
            _ => None,
        }
    }
}

/// Moisture state reported by the wet/dry model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Moisture {
    Wet,
    Dry,
}

impl Moisture {
    pub const LABELS: [&'static str; 2] = ["wet", "dry"];

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "wet" => Some(Self::Wet),
            "dry" => Some(Self::Dry),
            _ => None,
        }
    }
}

/// One classified observation, immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionRecord {
    pub class: WasteClass,
    pub wet_dry: Moisture,
    pub confidence: f64,
    pub is_mixed: bool,
    pub is_violation: bool,
    pub snapshot_path: String,
    pub timestamp: String,
}

/// The whole persisted document: latest record plus bounded history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreState {
    pub live: Option<DetectionRecord>,
    pub logs: Vec<DetectionRecord>,
}

/// Validated ingest payload before server-side defaults are applied.
#[derive(Debug, Clone)]
pub struct IngestPayload {
    pub class: WasteClass,
    pub wet_dry: Moisture,
    pub confidence: f64,
    pub is_mixed: bool,
    pub is_violation: bool,
    pub snapshot_path: Option<String>,
    pub snapshot_base64: Option<String>,
    pub timestamp: Option<String>,
}

/// Penalty rollup derived from the logs on every request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingSummary {
    pub total_items: u64,
    pub correct: u64,
    pub incorrect: u64,
    pub penalty: u64,
    pub final_bill: u64,
}
