/*! Symbol spacing

Designated symbols get a space on each side so that they become standalone tokens
once the text is split on whitespace.
!*/
use std::collections::BTreeSet;

use super::Transform;

/// Symbol classes, spaced one after the other in [SymbolClass::ORDER].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SymbolClass {
    Bracket,
    Operator,
    Currency,
    Handle,
    Other,
}

impl SymbolClass {
    pub const ORDER: [SymbolClass; 5] = [
        SymbolClass::Bracket,
        SymbolClass::Operator,
        SymbolClass::Currency,
        SymbolClass::Handle,
        SymbolClass::Other,
    ];

    pub fn of(c: char) -> Self {
        match c {
            '(' | ')' | '[' | ']' | '{' | '}' => SymbolClass::Bracket,
            '+' | '-' | '*' | '/' | '=' | '<' | '>' => SymbolClass::Operator,
            '$' | '€' | '£' | '¥' => SymbolClass::Currency,
            '@' | '#' => SymbolClass::Handle,
            _ => SymbolClass::Other,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SymbolSpacer {
    passes: Vec<(SymbolClass, Vec<char>)>,
    underscore_as_space: bool,
    split_hyphens: bool,
}

impl SymbolSpacer {
    /// Build a spacer for the provided symbols.
    ///
    /// Handle symbols (`@`, `#`) are only spaced if `isolate_handles` is set.
    /// With `split_hyphens`, `-` is turned into a plain space instead of being isolated.
    pub fn new(
        symbols: &BTreeSet<char>,
        isolate_handles: bool,
        underscore_as_space: bool,
        split_hyphens: bool,
    ) -> Self {
        let passes = SymbolClass::ORDER
            .iter()
            .filter(|class| isolate_handles || **class != SymbolClass::Handle)
            .map(|class| {
                let chars: Vec<char> = symbols
                    .iter()
                    .copied()
                    .filter(|c| SymbolClass::of(*c) == *class)
                    .filter(|c| !(split_hyphens && *c == '-'))
                    .collect();
                (*class, chars)
            })
            .filter(|(_, chars)| !chars.is_empty())
            .collect();

        Self {
            passes,
            underscore_as_space,
            split_hyphens,
        }
    }

    fn space_around(text: String, symbols: &[char]) -> String {
        if !text.contains(symbols) {
            return text;
        }
        let mut out = String::with_capacity(text.len() + 16);
        for c in text.chars() {
            if symbols.contains(&c) {
                out.push(' ');
                out.push(c);
                out.push(' ');
            } else {
                out.push(c);
            }
        }
        out
    }
}

impl Transform for SymbolSpacer {
    fn transform_own(&self, mut text: String) -> String {
        if self.underscore_as_space && text.contains('_') {
            text = text.replace('_', " ");
        }
        if self.split_hyphens && text.contains('-') {
            text = text.replace('-', " ");
        }
        for (_, symbols) in &self.passes {
            text = Self::space_around(text, symbols);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_symbols() -> BTreeSet<char> {
        "@#+-*/=<>()$".chars().collect()
    }

    #[test]
    fn operators() {
        let s = SymbolSpacer::new(&default_symbols(), true, true, false);
        assert_eq!(s.transform_own("a+b=c".to_string()), "a + b = c");
    }

    #[test]
    fn adjacent_symbols_are_spaced_independently() {
        let s = SymbolSpacer::new(&default_symbols(), true, true, false);
        assert_eq!(s.transform_own("f(x)".to_string()), "f ( x ) ");
        assert_eq!(s.transform_own("<=".to_string()), " <  = ");
    }

    #[test]
    fn handles_can_be_left_attached() {
        let s = SymbolSpacer::new(&default_symbols(), false, true, false);
        assert_eq!(s.transform_own("#covid".to_string()), "#covid");

        let s = SymbolSpacer::new(&default_symbols(), true, true, false);
        assert_eq!(s.transform_own("#covid".to_string()), " # covid");
    }

    #[test]
    fn underscores() {
        let s = SymbolSpacer::new(&default_symbols(), true, true, false);
        assert_eq!(s.transform_own("snake_case".to_string()), "snake case");

        let s = SymbolSpacer::new(&default_symbols(), true, false, false);
        assert_eq!(s.transform_own("snake_case".to_string()), "snake_case");
    }

    #[test]
    fn hyphen_splitting() {
        let s = SymbolSpacer::new(&default_symbols(), true, true, true);
        assert_eq!(s.transform_own("sars-cov-2".to_string()), "sars cov 2");

        let s = SymbolSpacer::new(&default_symbols(), true, true, false);
        assert_eq!(s.transform_own("sars-cov".to_string()), "sars - cov");
    }

    #[test]
    fn classes() {
        assert_eq!(SymbolClass::of('('), SymbolClass::Bracket);
        assert_eq!(SymbolClass::of('='), SymbolClass::Operator);
        assert_eq!(SymbolClass::of('$'), SymbolClass::Currency);
        assert_eq!(SymbolClass::of('#'), SymbolClass::Handle);
        assert_eq!(SymbolClass::of('%'), SymbolClass::Other);
    }
}
