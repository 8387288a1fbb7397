//! Transform trait.

/// A single text rewriting pass.
///
/// Passes are configured once and then applied to many fields,
/// possibly from several threads at once.
pub trait Transform {
    /// Takes ownership of the text and returns the rewritten text.
    fn transform_own(&self, text: String) -> String;
}
