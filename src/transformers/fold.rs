/*! Unicode folding

Applies compatibility decomposition (NFKD), drops combining marks and lowercases.
!*/
use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::UnicodeNormalization;

use super::Transform;

/// Accent stripping and lowercasing.
///
/// Decomposition and mark removal run a second time after lowercasing,
/// since some lowercase mappings emit combining marks (`İ` lowercases to `i` + U+0307)
/// and some compatibility decompositions emit uppercase letters (`ℌ` decomposes to `H`).
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeFolder;

impl UnicodeFolder {
    fn strip_marks(text: &str) -> String {
        text.nfkd()
            .filter(|c| canonical_combining_class(*c) == 0)
            .collect()
    }
}

impl Transform for UnicodeFolder {
    fn transform_own(&self, text: String) -> String {
        if text.is_ascii() {
            return text.to_ascii_lowercase();
        }
        let lowered = Self::strip_marks(&text).to_lowercase();
        Self::strip_marks(&lowered)
    }
}
