/*! CORD-19 style corpora.

A corpus is a metadata table (`metadata.csv`, one row per paper) and a `document_parses` folder
holding one JSON document per parse, split between `pmc_json` and `pdf_json` subfolders.
Rows reference their parses through the `pmc_json_files`/`pdf_json_files` columns.
!*/
pub mod metadata;
mod paper;
mod source;

pub use metadata::MetadataRow;
pub use paper::{Author, Paper, PaperMetadata, Paragraph};
pub use source::{DocumentSource, FsSource};
