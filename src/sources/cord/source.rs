//! Document lookup and loading.
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::Error;

use super::{MetadataRow, Paper};

/// Provides the parsed document of a metadata row.
pub trait DocumentSource {
    /// Find the document of `row`. Returns [None] when no referenced document is available.
    fn locate(&self, row: &MetadataRow) -> Option<PathBuf>;

    /// Load a located document.
    fn fetch(&self, path: &Path) -> Result<Paper, Error>;
}

/// Filesystem source: reads parses from a PMC and a PDF folder.
#[derive(Debug, Clone)]
pub struct FsSource {
    pmc_dir: PathBuf,
    pdf_dir: PathBuf,
}

impl FsSource {
    pub fn new(pmc_dir: PathBuf, pdf_dir: PathBuf) -> Self {
        Self { pmc_dir, pdf_dir }
    }

    /// Candidate paths for `row`, in preference order:
    /// PMC parses first, then PDF parses.
    ///
    /// Only the file name of each entry is kept, and is looked up in the matching folder.
    pub fn candidates(&self, row: &MetadataRow) -> Vec<PathBuf> {
        let pmc = row.pmc_files().map(|entry| (&self.pmc_dir, entry));
        let pdf = row.pdf_files().map(|entry| (&self.pdf_dir, entry));

        pmc.chain(pdf)
            .filter_map(|(dir, entry)| Path::new(entry).file_name().map(|name| dir.join(name)))
            .collect()
    }
}

impl DocumentSource for FsSource {
    fn locate(&self, row: &MetadataRow) -> Option<PathBuf> {
        self.candidates(row).into_iter().find(|path| path.is_file())
    }

    fn fetch(&self, path: &Path) -> Result<Paper, Error> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}
