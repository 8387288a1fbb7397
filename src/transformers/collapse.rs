use itertools::Itertools;

use super::Transform;

/// Joins whitespace-separated tokens with a single space.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceCollapser;

impl Transform for WhitespaceCollapser {
    fn transform_own(&self, text: String) -> String {
        text.split_whitespace().join(" ")
    }
}
