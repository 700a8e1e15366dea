use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

/// HTTP client for the NASA Scientific Visualization Studio API
#[derive(Debug, Clone)]
pub struct SvsApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl SvsApiClient {
    /// `timeout_secs == 0` leaves requests unbounded.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(timeout_secs));
        }
        Ok(Self {
            client: builder.build().context("building SVS HTTP client")?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET {base_url}/{id}
    pub async fn fetch_visualization(&self, id: u32) -> Result<SvsVisualization> {
        let url = format!("{}/{}", self.base_url, id);
        tracing::debug!("SVS request: GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .with_context(|| format!("SVS request {} failed", id))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let preview: String = body.chars().take(200).collect();
            anyhow::bail!("SVS {} answered {}: {}", id, status, preview);
        }

        let body = response.text().await?;
        serde_json::from_str::<SvsVisualization>(&body)
            .with_context(|| format!("Failed to parse SVS {} JSON", id))
    }
}

// ============================================================================
// Response structures (only the fields the pages use)
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct SvsVisualization {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub media_groups: Vec<MediaGroup>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaGroup {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub items: Vec<MediaItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaItem {
    #[serde(default)]
    pub instance: Option<MediaInstance>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaInstance {
    /// Non-media instances (pages, captions) may come without one.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub media_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_visualization_with_extra_fields() {
        let v: SvsVisualization = serde_json::from_str(
            r#"{
                "id": 12325,
                "title": "Fires",
                "description": "Smoke. Ash.",
                "release_date": "2016-07-01",
                "media_groups": [
                    {"id": 1, "description": null, "items": [
                        {"id": 9, "instance": {"url": "https://x/a.mp4", "media_type": "Movie", "alt_text": "clip"}},
                        {"id": 10}
                    ]}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(v.title, "Fires");
        assert_eq!(v.media_groups[0].items.len(), 2);
        assert!(v.media_groups[0].items[1].instance.is_none());
    }

    #[test]
    fn test_instance_without_url_still_parses() {
        let v: SvsVisualization = serde_json::from_str(
            r#"{
                "title": "T",
                "description": "D. E. F.",
                "media_groups": [{"items": [
                    {"instance": {"url": "https://x/a.mp4"}},
                    {"instance": {"title": "Related page", "media_type": "Page"}}
                ]}]
            }"#,
        )
        .unwrap();
        let items = &v.media_groups[0].items;
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].instance.as_ref().and_then(|i| i.url.as_deref()), None);
    }

    #[test]
    fn test_missing_title_is_rejected() {
        let parsed = serde_json::from_str::<SvsVisualization>(r#"{"description": "d"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_base_url_trailing_slash_is_dropped() {
        let client = SvsApiClient::new("https://svs.gsfc.nasa.gov/api/", 0).unwrap();
        assert_eq!(client.base_url, "https://svs.gsfc.nasa.gov/api");
    }
}
