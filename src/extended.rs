//! Engine-facing abstraction over non-text substitutable values.

/// A placeholder value that is not plain text.
///
/// The templating engine substitutes plain-text values directly; everything
/// else — images today, other media later — goes through this trait.
/// [`alt_string`](ExtendedValue::alt_string) supplies the human-readable
/// fallback the engine inserts when the target document or output format
/// cannot render the value itself.
pub trait ExtendedValue {
    /// Fallback text for the value; `None` when the value carries none.
    fn alt_string(&self) -> Option<&str>;
}
