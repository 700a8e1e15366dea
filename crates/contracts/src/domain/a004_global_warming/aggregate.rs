use serde::{Deserialize, Serialize};

/// Global temperature anomaly for one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalWarmingRecord {
    pub id: i64,
    pub year: i32,
    /// Deviation from the 1951-1980 mean, in degrees Celsius.
    pub temperature_anomaly: f64,
    pub co2_ppm: Option<f64>,
}
