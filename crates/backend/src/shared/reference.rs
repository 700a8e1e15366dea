use anyhow::Context;
use contracts::shared::reference::{DisasterTypeDetail, DisasterTypeInfo};
use serde_json::Value;
use std::path::Path;

// Both files are read on every call; edits show up without a restart.

/// Load the disaster-type catalog (`{"disasters": [...]}`).
///
/// A document without a `disasters` array yields an empty catalog. Entries
/// that do not look like a catalog entry are skipped.
pub async fn load_type_catalog(path: &Path) -> anyhow::Result<Vec<DisasterTypeInfo>> {
    let document = read_json(path).await?;
    let entries = match document.get("disasters") {
        Some(Value::Array(items)) => items.clone(),
        _ => {
            tracing::warn!("{} has no disasters array", path.display());
            Vec::new()
        }
    };
    Ok(entries
        .into_iter()
        .filter_map(|item| parse_entry(path, item))
        .collect())
}

/// Load the disaster-type detail list (top-level array).
pub async fn load_type_details(path: &Path) -> anyhow::Result<Vec<DisasterTypeDetail>> {
    let document = read_json(path).await?;
    let Value::Array(items) = document else {
        anyhow::bail!("{} is not a JSON array", path.display());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| parse_entry(path, item))
        .collect())
}

fn parse_entry<T: serde::de::DeserializeOwned>(path: &Path, item: Value) -> Option<T> {
    match serde_json::from_value(item) {
        Ok(entry) => Some(entry),
        Err(e) => {
            tracing::warn!("skipping entry in {}: {}", path.display(), e);
            None
        }
    }
}

async fn read_json(path: &Path) -> anyhow::Result<Value> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}
