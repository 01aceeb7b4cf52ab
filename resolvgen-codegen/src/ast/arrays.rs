//! TypeScript/JavaScript array literal builder.

use crate::builder::CodeFragment;

/// Array literal whose elements are raw expressions
/// (identifiers, calls, ...), rendered one element per line.
#[derive(Debug, Clone, Default)]
pub struct JsArray {
    elements: Vec<String>,
}

impl JsArray {
    /// Create an array from raw expressions (not quoted).
    pub fn from_raw<I, S>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            elements: iter.into_iter().map(Into::into).collect(),
        }
    }

    /// One `element,` line per element, trailing comma included.
    pub fn element_lines(&self) -> Vec<CodeFragment> {
        self.elements
            .iter()
            .map(|e| CodeFragment::line(format!("{},", e)))
            .collect()
    }
}
