/*! Character filtering and punctuation cleanup.

[CharacterFilter] replaces every character outside the allowed set with a space.
Periods and quotes go through the filter untouched, and are then handled by [PunctuationCleanup].
!*/
use std::collections::BTreeSet;

use super::protect::is_sentinel;
use super::Transform;

const APOSTROPHES: [char; 3] = ['\'', '\u{2018}', '\u{2019}'];
const DOUBLE_QUOTES: [char; 4] = ['"', '\u{201C}', '\u{201D}', '\u{201E}'];

/// Apostrophes and double quotes handled by [PunctuationCleanup].
pub fn is_quote(c: char) -> bool {
    APOSTROPHES.contains(&c) || DOUBLE_QUOTES.contains(&c)
}

#[derive(Debug, Clone)]
pub struct CharacterFilter {
    symbols: BTreeSet<char>,
    extra: BTreeSet<char>,
    keep_underscore: bool,
}

impl CharacterFilter {
    pub fn new(symbols: &BTreeSet<char>, extra: &BTreeSet<char>, keep_underscore: bool) -> Self {
        Self {
            symbols: symbols.clone(),
            extra: extra.clone(),
            keep_underscore,
        }
    }

    fn is_allowed(&self, c: char) -> bool {
        c.is_ascii_lowercase()
            || c.is_ascii_digit()
            || c.is_whitespace()
            || c == '.'
            || is_quote(c)
            || is_sentinel(c)
            || (self.keep_underscore && c == '_')
            || self.symbols.contains(&c)
            || self.extra.contains(&c)
    }
}

impl Transform for CharacterFilter {
    fn transform_own(&self, text: String) -> String {
        if text.chars().all(|c| self.is_allowed(c)) {
            return text;
        }
        text.chars()
            .map(|c| if self.is_allowed(c) { c } else { ' ' })
            .collect()
    }
}

/// Period and quote handling.
///
/// - a period between two ASCII digits is kept, any other period becomes a space.
/// - apostrophes are deleted (`don't` gives `dont`), or kept as `'` when allowed.
///   An apostrophe next to a placeholder becomes a space instead.
/// - double quotes become spaces.
#[derive(Debug, Clone, Default)]
pub struct PunctuationCleanup {
    allow_apostrophe: bool,
}

impl PunctuationCleanup {
    pub fn new(allow_apostrophe: bool) -> Self {
        Self { allow_apostrophe }
    }
}

impl Transform for PunctuationCleanup {
    fn transform_own(&self, text: String) -> String {
        if !text.contains(|c: char| c == '.' || is_quote(c)) {
            return text;
        }

        let mut out = String::with_capacity(text.len());
        let mut prev: Option<char> = None;
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '.' => {
                    let between_digits = prev.map_or(false, |p| p.is_ascii_digit())
                        && chars.peek().map_or(false, |n| n.is_ascii_digit());
                    out.push(if between_digits { '.' } else { ' ' });
                }
                c if APOSTROPHES.contains(&c) => {
                    if self.allow_apostrophe {
                        out.push('\'');
                    } else if prev.map_or(false, is_sentinel)
                        || chars.peek().map_or(false, |n| is_sentinel(*n))
                    {
                        // never glue a protected span to its neighbour
                        out.push(' ');
                    }
                }
                c if DOUBLE_QUOTES.contains(&c) => out.push(' '),
                c => out.push(c),
            }
            prev = Some(c);
        }

        out
    }
}
