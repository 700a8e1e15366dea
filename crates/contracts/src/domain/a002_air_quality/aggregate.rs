use serde::{Deserialize, Serialize};

/// Yearly air-quality measurement for a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualityReading {
    pub id: i64,
    pub country: String,
    pub city: Option<String>,
    pub year: i32,
    pub aqi: Option<f64>,
    pub pm25: Option<f64>,
    pub pm10: Option<f64>,
    pub no2: Option<f64>,
}
