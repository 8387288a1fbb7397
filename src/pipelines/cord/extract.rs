//! Record extraction: turns a metadata row and its paper into a [NormalizedRecord].
use itertools::Itertools;

use crate::normalizer::Normalizer;
use crate::sources::cord::{MetadataRow, Paper, Paragraph};

use super::NormalizedRecord;

pub struct RecordExtractor<'a> {
    normalizer: &'a Normalizer,
    metadata_fallback: bool,
}

impl<'a> RecordExtractor<'a> {
    /// With `metadata_fallback`, an empty title, abstract or journal is taken
    /// from the metadata row instead.
    pub fn new(normalizer: &'a Normalizer, metadata_fallback: bool) -> Self {
        Self {
            normalizer,
            metadata_fallback,
        }
    }

    /// Normalize each paragraph, dropping empty ones.
    fn paragraphs(&self, paragraphs: &[Paragraph]) -> String {
        paragraphs
            .iter()
            .map(|p| self.normalizer.normalize(p.text.as_deref()))
            .filter(|p| !p.is_empty())
            .join(" ")
    }

    fn fallback(&self, field: &mut String, from_row: &str) {
        if self.metadata_fallback && field.is_empty() {
            *field = self.normalizer.normalize_str(from_row);
        }
    }

    pub fn extract(&self, row: &MetadataRow, paper: &Paper) -> NormalizedRecord {
        let metadata = &paper.metadata;

        let mut title = self.normalizer.normalize(metadata.title.as_deref());
        let mut abstract_text = self.paragraphs(&paper.abstract_paragraphs);
        let body_text = self.paragraphs(&paper.body_text);
        let mut journal = self.normalizer.normalize(metadata.journal.as_deref());

        let authors = metadata
            .authors
            .iter()
            .map(|author| self.normalizer.normalize_str(&author.full_name()))
            .filter(|author| !author.is_empty())
            .join(", ");

        self.fallback(&mut title, &row.title);
        self.fallback(&mut abstract_text, &row.abstract_text);
        self.fallback(&mut journal, &row.journal);

        NormalizedRecord {
            id: row.id().to_string(),
            url: row.url.clone(),
            authors,
            title,
            abstract_text,
            body_text,
            journal,
        }
    }
}
