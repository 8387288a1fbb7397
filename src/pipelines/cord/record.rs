use serde::{Deserialize, Serialize};

/// Name of the identifier column in output tables.
pub const ID_COLUMN: &str = "cord_id";

/// Output table columns, in order.
pub const COLUMNS: [&str; 7] = [
    ID_COLUMN,
    "url",
    "authors",
    "title",
    "abstract",
    "body_text",
    "journal",
];

/// A normalized paper: one output table row.
///
/// Fields are serialized in declaration order, which is the output column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    #[serde(rename = "cord_id")]
    pub id: String,
    pub url: String,
    pub authors: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub body_text: String,
    pub journal: String,
}
