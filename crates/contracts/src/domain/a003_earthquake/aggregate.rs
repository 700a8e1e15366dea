use serde::{Deserialize, Serialize};

/// Single recorded earthquake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthquakeEvent {
    pub id: i64,
    /// Event time as published by the source catalog (ISO 8601).
    pub time: String,
    pub place: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub depth_km: Option<f64>,
    pub magnitude: f64,
}
