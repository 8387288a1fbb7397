//! Parsed paper documents (`document_parses/*/*.json`).
//!
//! Deserialization is lenient: a field holding the wrong JSON type deserializes as absent,
//! and malformed list elements are skipped.
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Paragraph {
    #[serde(deserialize_with = "lenient")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Author {
    #[serde(deserialize_with = "lenient")]
    pub first: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub last: Option<String>,
}

impl Author {
    /// `first last`, with absent parts left empty.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first.as_deref().unwrap_or_default(),
            self.last.as_deref().unwrap_or_default()
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaperMetadata {
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_seq")]
    pub authors: Vec<Author>,
    #[serde(deserialize_with = "lenient")]
    pub journal: Option<String>,
}

/// A parsed paper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Paper {
    #[serde(deserialize_with = "lenient")]
    pub paper_id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub metadata: PaperMetadata,
    #[serde(rename = "abstract", deserialize_with = "lenient_seq")]
    pub abstract_paragraphs: Vec<Paragraph>,
    #[serde(deserialize_with = "lenient_seq")]
    pub body_text: Vec<Paragraph>,
}
