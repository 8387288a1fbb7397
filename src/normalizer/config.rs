//! Normalizer configuration.
use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Symbols isolated as standalone tokens by default.
pub const DEFAULT_SYMBOLS: &str = "@#+-*/=<>()$";

/// Options of the normalization pipeline.
///
/// Every field has a default, so a JSON configuration file only needs to list
/// the options it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Shield numbers (with optional thousands separators and decimal part).
    pub protect_numbers: bool,
    /// Shield email addresses.
    pub protect_emails: bool,
    /// Drop commas from protected numbers (`1,234.56` gives `1234.56`).
    /// Has no effect when `protect_numbers` is off.
    pub strip_thousands_separators: bool,
    /// Turn `_` into a space. When unset, underscores are kept.
    pub treat_underscore_as_space: bool,
    /// Keep apostrophes instead of deleting them.
    pub allow_apostrophe: bool,
    /// Space `@` and `#` around like other designated symbols.
    pub isolate_handles: bool,
    /// Dissolve `-` into a space instead of isolating it.
    pub split_hyphens: bool,
    /// Symbols kept and isolated as tokens.
    pub designated_symbols: BTreeSet<char>,
    /// Additional characters (letters, usually) allowed through the filter.
    pub extra_allowed: BTreeSet<char>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            protect_numbers: true,
            protect_emails: true,
            strip_thousands_separators: true,
            treat_underscore_as_space: true,
            allow_apostrophe: false,
            isolate_handles: true,
            split_hyphens: false,
            designated_symbols: DEFAULT_SYMBOLS.chars().collect(),
            extra_allowed: BTreeSet::new(),
        }
    }
}

impl NormalizerConfig {
    /// Variant without number/email protection.
    ///
    /// Without protection, commas inside numbers are plain punctuation and become spaces:
    /// `strip_thousands_separators` only applies to protected numbers. The period rule still keeps
    /// decimals together, so `$1,234.56` gives `$ 1 234.56`.
    pub fn legacy() -> Self {
        Self {
            protect_numbers: false,
            protect_emails: false,
            ..Self::default()
        }
    }

    /// Legacy variant that also dissolves hyphens and keeps `ß`.
    pub fn indexer() -> Self {
        Self {
            split_hyphens: true,
            extra_allowed: ['ß'].into_iter().collect(),
            ..Self::legacy()
        }
    }

    /// Load a configuration from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json() {
        let config: NormalizerConfig =
            serde_json::from_str(r#"{"protect_numbers": false, "extra_allowed": ["ß", "ø"]}"#)
                .unwrap();
        assert!(!config.protect_numbers);
        assert!(config.protect_emails);
        assert_eq!(config.extra_allowed.len(), 2);
        assert_eq!(
            config.designated_symbols,
            DEFAULT_SYMBOLS.chars().collect::<BTreeSet<_>>()
        );
    }

    #[test]
    fn serialize_roundtrip() {
        let config = NormalizerConfig::indexer();
        let ser = serde_json::to_string(&config).unwrap();
        let de: NormalizerConfig = serde_json::from_str(&ser).unwrap();
        assert_eq!(config, de);
    }

    #[test]
    fn presets() {
        let legacy = NormalizerConfig::legacy();
        assert!(!legacy.protect_emails && !legacy.protect_numbers);
        assert!(NormalizerConfig::indexer().split_hyphens);
        assert!(!legacy.split_hyphens);
    }

    #[test]
    fn from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("normalizer.json");
        std::fs::write(&path, r#"{"allow_apostrophe": true}"#).unwrap();
        let config = NormalizerConfig::from_path(&path).unwrap();
        assert!(config.allow_apostrophe);

        assert!(NormalizerConfig::from_path(&dir.path().join("missing.json")).is_err());
    }
}
