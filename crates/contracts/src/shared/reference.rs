use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Catalog entry describing a disaster type (`data.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisasterTypeInfo {
    #[serde(rename = "DisasterType")]
    pub disaster_type: String,
    #[serde(default, deserialize_with = "display_text")]
    pub desc: Option<String>,
    #[serde(default, deserialize_with = "display_text")]
    pub image: Option<String>,
}

/// Any JSON value as display text: strings unquoted, nulls absent, everything
/// else in its JSON form.
fn display_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_text(Value::deserialize(deserializer)?))
}

fn value_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Detail entry for a disaster type (`newData.json`).
///
/// Only `DisasterType` is fixed; the remaining keys are kept as-is and shown
/// on the detail page in file order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisasterTypeDetail {
    #[serde(rename = "DisasterType")]
    pub disaster_type: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl DisasterTypeDetail {
    /// Attribute as display text. Strings are returned unquoted, other scalars
    /// use their JSON form, nulls are skipped.
    pub fn text(&self, key: &str) -> Option<String> {
        value_text(self.attributes.get(key)?.clone())
    }
}
