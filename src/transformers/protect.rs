/*! Substring protection and restoration.

Emails and numbers are swapped for opaque placeholders before the destructive passes run,
and swapped back afterwards.

A placeholder is made of Private Use Area characters only:
an opening sentinel, the span index in hexadecimal (one PUA char per digit) and a closing sentinel.
The whole `U+E000..=U+E0FF` block is scrubbed from the input first,
so document text can never look like a placeholder.
!*/
use lazy_static::lazy_static;
use regex::{Captures, Regex};

const SENTINEL_OPEN: char = '\u{E000}';
const SENTINEL_CLOSE: char = '\u{E001}';
const DIGIT_BASE: u32 = 0xE010;

lazy_static! {
    static ref EMAIL: Regex =
        Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap();
    // thousands-grouped form first so that `1,234` is one span
    static ref NUMBER: Regex =
        Regex::new(r"[0-9]{1,3}(?:,[0-9]{3})+(?:\.[0-9]+)?|[0-9]+(?:\.[0-9]+)?").unwrap();
}

/// Returns `true` for characters reserved for placeholders.
pub fn is_sentinel(c: char) -> bool {
    ('\u{E000}'..='\u{E0FF}').contains(&c)
}

fn placeholder(index: usize) -> String {
    let mut p = String::with_capacity(24);
    p.push(SENTINEL_OPEN);
    let hex = format!("{:x}", index);
    for digit in hex.chars() {
        // to_digit can't fail on the output of {:x}
        let value = digit.to_digit(16).unwrap_or_default();
        if let Some(c) = char::from_u32(DIGIT_BASE + value) {
            p.push(c);
        }
    }
    p.push(SENTINEL_CLOSE);
    p
}

/// Protected spans of a single normalization call, indexed by placeholder number.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SpanTable {
    spans: Vec<String>,
}

impl SpanTable {
    /// Number of spans protected during this call.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Get a reference to the recorded spans, in placeholder order.
    pub fn spans(&self) -> &[String] {
        &self.spans
    }

    /// Replace every match of `rule` with a fresh placeholder,
    /// recording `keep(match)` as the text to restore.
    fn shield<F>(&mut self, rule: &Regex, text: &str, keep: F) -> String
    where
        F: Fn(&str) -> String,
    {
        rule.replace_all(text, |caps: &Captures| {
            let index = self.spans.len();
            self.spans.push(keep(&caps[0]));
            placeholder(index)
        })
        .into_owned()
    }

    /// Replace each placeholder with its recorded span.
    pub fn restore(&self, text: String) -> String {
        if self.spans.is_empty() {
            return text;
        }

        let extra: usize = self.spans.iter().map(String::len).sum();
        let mut out = String::with_capacity(text.len() + extra);
        let mut chars = text.chars();

        while let Some(c) = chars.next() {
            if c != SENTINEL_OPEN {
                out.push(c);
                continue;
            }

            let mut index = 0usize;
            for digit in chars.by_ref() {
                if digit == SENTINEL_CLOSE {
                    break;
                }
                if let Some(value) = (digit as u32).checked_sub(DIGIT_BASE) {
                    index = index * 16 + value as usize;
                }
            }
            if let Some(span) = self.spans.get(index) {
                out.push_str(span);
            }
        }

        out
    }
}

/// Email/number shielding.
#[derive(Debug, Clone)]
pub struct Protector {
    protect_emails: bool,
    protect_numbers: bool,
    strip_thousands_separators: bool,
}

impl Protector {
    pub fn new(protect_emails: bool, protect_numbers: bool, strip_thousands_separators: bool) -> Self {
        Self {
            protect_emails,
            protect_numbers,
            strip_thousands_separators,
        }
    }

    /// Scrub reserved characters, then shield emails, then numbers.
    ///
    /// The scrub runs even when both rules are off, so that no reserved character
    /// reaches the later passes.
    pub fn protect(&self, text: String) -> (String, SpanTable) {
        let mut table = SpanTable::default();

        let mut text = if text.contains(is_sentinel) {
            text.replace(is_sentinel, " ")
        } else {
            text
        };

        if self.protect_emails {
            text = table.shield(&EMAIL, &text, str::to_string);
        }

        if self.protect_numbers {
            let strip = self.strip_thousands_separators;
            text = table.shield(&NUMBER, &text, |number| {
                if strip {
                    number.replace(',', "")
                } else {
                    number.to_string()
                }
            });
        }

        (text, table)
    }
}

impl Default for Protector {
    fn default() -> Self {
        Self::new(true, true, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn protect(text: &str) -> (String, SpanTable) {
        Protector::default().protect(text.to_string())
    }

    #[test]
    fn email_then_number() {
        let (text, table) = protect("mail bob.smith@uni-x.edu about 1,234.56 cases");
        assert_eq!(
            table.spans(),
            &["bob.smith@uni-x.edu".to_string(), "1234.56".to_string()]
        );
        assert!(!text.contains('@'));
        assert!(!text.contains(|c: char| c.is_ascii_digit()));
        assert_eq!(
            table.restore(text),
            "mail bob.smith@uni-x.edu about 1234.56 cases"
        );
    }

    #[test]
    fn digits_inside_email_stay_with_email() {
        let (_, table) = protect("covid19@who2.int");
        assert_eq!(table.spans(), &["covid19@who2.int".to_string()]);
    }

    #[test]
    fn keep_separators() {
        let (text, table) = Protector::new(true, true, false).protect("1,234.56".to_string());
        assert_eq!(table.spans(), &["1,234.56".to_string()]);
        assert_eq!(table.restore(text), "1,234.56");
    }

    #[test]
    fn ungrouped_commas_split_numbers() {
        let (_, table) = protect("12,34 and 1234,567");
        assert_eq!(
            table.spans(),
            &["12", "34", "1234", "567"].map(String::from)
        );
    }

    #[test]
    fn placeholders_are_unique() {
        let input: String = (0..300).map(|i| format!("{} ", i)).collect();
        let (text, table) = protect(&input);
        assert_eq!(table.len(), 300);

        let mut placeholders: Vec<String> = (0..300).map(placeholder).collect();
        placeholders.sort();
        placeholders.dedup();
        assert_eq!(placeholders.len(), 300);

        assert_eq!(table.restore(text), input);
    }

    #[test]
    fn reserved_characters_are_scrubbed() {
        let forged = format!("x{}{}{}y", SENTINEL_OPEN, '\u{E010}', SENTINEL_CLOSE);
        let (text, table) = protect(&forged);
        assert!(table.is_empty());
        assert_eq!(text, "x   y");
    }

    #[test]
    fn nothing_to_protect() {
        let (text, table) = Protector::new(false, false, true).protect("a 1 b@c.de".to_string());
        assert!(table.is_empty());
        assert_eq!(text, "a 1 b@c.de");
    }
}
