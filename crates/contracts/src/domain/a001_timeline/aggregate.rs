use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Historical disaster event from the timeline dataset.
///
/// Field names follow the source dataset verbatim (`"Start Year"`,
/// `"Disaster Type"`, ...) so that the JSON served by `/api/timeline`
/// matches what the pages and their scripts expect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisasterRecord {
    pub id: i64,

    #[serde(rename = "Dis No", default, skip_serializing_if = "Option::is_none")]
    pub dis_no: Option<String>,

    #[serde(rename = "Disaster Group", default, skip_serializing_if = "Option::is_none")]
    pub disaster_group: Option<String>,

    #[serde(rename = "Disaster Subgroup", default, skip_serializing_if = "Option::is_none")]
    pub disaster_subgroup: Option<String>,

    #[serde(rename = "Disaster Type", default, skip_serializing_if = "Option::is_none")]
    pub disaster_type: Option<String>,

    #[serde(rename = "Disaster Subtype", default, skip_serializing_if = "Option::is_none")]
    pub disaster_subtype: Option<String>,

    #[serde(rename = "Event Name", default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,

    #[serde(rename = "Country", default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(rename = "ISO", default, skip_serializing_if = "Option::is_none")]
    pub iso: Option<String>,

    #[serde(rename = "Region", default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(rename = "Continent", default, skip_serializing_if = "Option::is_none")]
    pub continent: Option<String>,

    #[serde(rename = "Location", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(rename = "Start Year", default, skip_serializing_if = "Option::is_none")]
    pub start_year: Option<i32>,

    #[serde(rename = "Start Month", default, skip_serializing_if = "Option::is_none")]
    pub start_month: Option<i32>,

    #[serde(rename = "Start Day", default, skip_serializing_if = "Option::is_none")]
    pub start_day: Option<i32>,

    #[serde(rename = "End Year", default, skip_serializing_if = "Option::is_none")]
    pub end_year: Option<i32>,

    #[serde(rename = "End Month", default, skip_serializing_if = "Option::is_none")]
    pub end_month: Option<i32>,

    #[serde(rename = "End Day", default, skip_serializing_if = "Option::is_none")]
    pub end_day: Option<i32>,

    #[serde(rename = "Total Deaths", default, skip_serializing_if = "Option::is_none")]
    pub total_deaths: Option<i64>,

    #[serde(rename = "No Injured", default, skip_serializing_if = "Option::is_none")]
    pub no_injured: Option<i64>,

    #[serde(rename = "Total Affected", default, skip_serializing_if = "Option::is_none")]
    pub total_affected: Option<i64>,
}

impl DisasterRecord {
    /// Disaster type, treating an empty string the same as a missing one.
    pub fn type_name(&self) -> Option<&str> {
        self.disaster_type.as_deref().filter(|t| !t.is_empty())
    }
}

// ============================================================================
// Join result
// ============================================================================

/// A disaster type seen in a given year, enriched with its catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearDisasterEntry {
    #[serde(rename = "DisasterType")]
    pub disaster_type: String,
    pub desc: Option<String>,
    pub image: Option<String>,
    /// Year exactly as it appeared in the request path.
    pub year: String,
}
