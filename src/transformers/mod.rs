/*! Text transformers.

Each pass of the normalization pipeline lives here, in pipeline order:

1. [UnicodeFolder]: compatibility decomposition, diacritic removal, lowercasing.
2. [Protector]: shields emails and numbers behind placeholders (see [SpanTable]).
3. [SymbolSpacer]: isolates operators, brackets, currency and handle symbols.
4. [CharacterFilter]: replaces characters outside the allowed set with spaces.
5. [PunctuationCleanup]: periods and quotes.
6. [SpanTable::restore]: puts protected spans back.
7. [WhitespaceCollapser]: single spaces, trimmed.

Passes implementing [Transform] are pure `String -> String` functions.
The protector is the exception since it also returns the span table needed for restoration.
!*/

mod collapse;
mod filter;
mod fold;
mod protect;
mod spacer;
mod transform;

pub use collapse::WhitespaceCollapser;
pub use filter::{is_quote, CharacterFilter, PunctuationCleanup};
pub use fold::UnicodeFolder;
pub use protect::{is_sentinel, Protector, SpanTable};
pub use spacer::{SymbolClass, SymbolSpacer};
pub use transform::Transform;
