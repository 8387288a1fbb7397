/*! Text normalization pipeline.

[Normalizer] chains the [crate::transformers] passes in a fixed order:

1. absent input short-circuits to an empty string,
1. Unicode folding,
1. email then number protection,
1. symbol spacing (underscores, hyphens, handles),
1. character filtering,
1. period/quote cleanup,
1. restoration of protected spans,
1. whitespace collapsing.

The result is lowercase, accent-free, space-tokenized, and normalizing it again yields the same string.

```
use scinorm::normalizer::Normalizer;

let normalizer = Normalizer::default();
assert_eq!(normalizer.normalize(Some("Price is $1,234.56 today")), "price is $ 1234.56 today");
assert_eq!(normalizer.normalize(None), "");
```
!*/
mod config;

use std::collections::BTreeSet;

use log::warn;

pub use config::{NormalizerConfig, DEFAULT_SYMBOLS};

use crate::transformers::{
    is_quote, is_sentinel, CharacterFilter, Protector, PunctuationCleanup, SymbolSpacer,
    Transform, UnicodeFolder, WhitespaceCollapser,
};

/// Configured normalization pipeline.
///
/// Holds no mutable state: a single instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: NormalizerConfig,
    folder: UnicodeFolder,
    protector: Protector,
    spacer: SymbolSpacer,
    filter: CharacterFilter,
    cleanup: PunctuationCleanup,
    collapser: WhitespaceCollapser,
}

impl Normalizer {
    /// Build the pipeline.
    ///
    /// Designated symbols that can't be isolated (alphanumerics, whitespace, periods,
    /// underscores, quotes and reserved placeholder characters) are dropped with a warning.
    pub fn new(mut config: NormalizerConfig) -> Self {
        config.designated_symbols = Self::sanitize_symbols(&config.designated_symbols);
        config.extra_allowed = config
            .extra_allowed
            .iter()
            .copied()
            .filter(|c| !is_sentinel(*c))
            .collect();

        let protector = Protector::new(
            config.protect_emails,
            config.protect_numbers,
            config.strip_thousands_separators,
        );
        let spacer = SymbolSpacer::new(
            &config.designated_symbols,
            config.isolate_handles,
            config.treat_underscore_as_space,
            config.split_hyphens,
        );
        let filter = CharacterFilter::new(
            &config.designated_symbols,
            &config.extra_allowed,
            !config.treat_underscore_as_space,
        );
        let cleanup = PunctuationCleanup::new(config.allow_apostrophe);

        Self {
            config,
            folder: UnicodeFolder,
            protector,
            spacer,
            filter,
            cleanup,
            collapser: WhitespaceCollapser,
        }
    }

    fn sanitize_symbols(symbols: &BTreeSet<char>) -> BTreeSet<char> {
        symbols
            .iter()
            .copied()
            .filter(|c| {
                let rejected = c.is_alphanumeric()
                    || c.is_whitespace()
                    || *c == '.'
                    || *c == '_'
                    || is_quote(*c)
                    || is_sentinel(*c);
                if rejected {
                    warn!("ignoring designated symbol {:?}", c);
                }
                !rejected
            })
            .collect()
    }

    /// Get a reference to the effective configuration.
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize a possibly absent field. Absent fields give an empty string.
    pub fn normalize(&self, text: Option<&str>) -> String {
        match text {
            Some(text) => self.normalize_str(text),
            None => String::new(),
        }
    }

    pub fn normalize_str(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let text = self.folder.transform_own(text.to_string());
        let (text, spans) = self.protector.protect(text);
        let text = self.spacer.transform_own(text);
        let text = self.filter.transform_own(text);
        let text = self.cleanup.transform_own(text);
        let text = spans.restore(text);
        self.collapser.transform_own(text)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(NormalizerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(text: &str) -> String {
        Normalizer::default().normalize_str(text)
    }

    #[test]
    fn accent_stripping() {
        assert_eq!(norm("Café"), "cafe");
    }

    #[test]
    fn number_protection() {
        assert_eq!(norm("Price is $1,234.56 today"), "price is $ 1234.56 today");
    }

    #[test]
    fn email_preservation() {
        assert_eq!(
            norm("Contact: John.Doe@example.com now"),
            "contact john.doe@example.com now"
        );
    }

    #[test]
    fn operator_spacing() {
        assert_eq!(norm("a+b=c"), "a + b = c");
        assert_eq!(norm("f(x)<=2*y"), "f ( x ) < = 2 * y");
    }

    #[test]
    fn disallowed_characters() {
        assert_eq!(norm("100% sure!"), "100 sure");
    }

    #[test]
    fn whitespace_collapse() {
        assert_eq!(norm("a    b\t\nc"), "a b c");
    }

    #[test]
    fn absent_and_empty() {
        let n = Normalizer::default();
        assert_eq!(n.normalize(None), "");
        assert_eq!(n.normalize(Some("")), "");
        assert_eq!(n.normalize(Some(" !?; ")), "");
    }

    #[test]
    fn sentences() {
        assert_eq!(
            norm("The R0 was 2.5. Cases rose (see Fig. 3)."),
            "the r0 was 2.5 cases rose ( see fig 3 )"
        );
        assert_eq!(norm("Don't \"panic\""), "dont panic");
    }

    #[test]
    fn protected_spans_stay_apart() {
        assert_eq!(norm("a@b.cc'x@d.ee"), "a@b.cc x@d.ee");
        assert_eq!(norm("the 1990's"), "the 1990 s");
    }

    #[test]
    fn hyphens_are_tokens_by_default() {
        assert_eq!(norm("SARS-CoV-2"), "sars - cov - 2");
    }

    #[test]
    fn legacy_preset() {
        let n = Normalizer::new(NormalizerConfig::legacy());
        assert_eq!(
            n.normalize_str("Price is $1,234.56 today"),
            "price is $ 1 234.56 today"
        );
        assert_eq!(n.normalize_str("mail a@b.com"), "mail a @ b com");

        // separators only matter for protected numbers
        let kept = Normalizer::new(NormalizerConfig {
            strip_thousands_separators: false,
            ..NormalizerConfig::legacy()
        });
        assert_eq!(kept.normalize_str("$1,234.56"), n.normalize_str("$1,234.56"));
    }

    #[test]
    fn indexer_preset() {
        let n = Normalizer::new(NormalizerConfig::indexer());
        assert_eq!(n.normalize_str("SARS-CoV-2 in der Straße"), "sars cov 2 in der straße");
    }

    #[test]
    fn options() {
        let n = Normalizer::new(NormalizerConfig {
            allow_apostrophe: true,
            treat_underscore_as_space: false,
            strip_thousands_separators: false,
            isolate_handles: false,
            ..NormalizerConfig::default()
        });
        assert_eq!(
            n.normalize_str("Don't touch snake_case, 1,234.56 or #tags"),
            "don't touch snake_case 1,234.56 or #tags"
        );
    }

    #[test]
    fn invalid_symbols_are_dropped() {
        let n = Normalizer::new(NormalizerConfig {
            designated_symbols: ['%', 'a', '.', ' ', '_'].into_iter().collect(),
            ..NormalizerConfig::default()
        });
        assert_eq!(
            n.config().designated_symbols,
            ['%'].into_iter().collect::<BTreeSet<_>>()
        );
        assert_eq!(n.normalize_str("100%+1"), "100 % 1");
    }

    #[test]
    fn reserved_characters_never_leak() {
        let out = norm("a\u{E000}\u{E012}\u{E001}b 42");
        assert_eq!(out, "a b 42");
    }

    #[test]
    fn idempotent() {
        let inputs = [
            "Price is $1,234.56 today",
            "Contact: John.Doe@example.com now",
            "x:y.z@ab.com1,234,5678 and 3.x",
            "Ünïcödé—text… with “quotes” and ‘single’ ones",
            "1990's rock 'n' roll_music",
        ];
        let n = Normalizer::default();
        for input in inputs {
            let once = n.normalize_str(input);
            assert_eq!(n.normalize_str(&once), once, "input: {:?}", input);
        }
    }
}
