use serde::{Deserialize, Serialize};

/// Short teaser shown on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTeaser {
    pub title: String,
    pub description: String,
}

/// Payload of `GET /home_events`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeEvents {
    pub nasa1: EventTeaser,
    pub nasa2: EventTeaser,
    pub nasa3: EventTeaser,
    pub nasa4: EventTeaser,
}

/// One event card on the events page.
///
/// Media slots that could not be filled from the upstream visualization are
/// left out of the JSON rather than sent as placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSummary {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mediagroup: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video1_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video2_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image1_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image2_text: Option<String>,
}

/// Payload of `GET /events`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Events {
    pub event1: EventSummary,
    pub event2: EventSummary,
    pub event3: EventSummary,
    pub event4: EventSummary,
}
