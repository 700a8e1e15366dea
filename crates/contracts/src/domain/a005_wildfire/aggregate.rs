use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WildfireRecord {
    pub id: i64,
    pub year: i32,
    pub country: String,
    pub region: Option<String>,
    pub burned_area_ha: Option<f64>,
    pub fire_count: Option<i64>,
}
