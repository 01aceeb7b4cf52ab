//! TypeScript exported const builder.

use super::JsArray;
use crate::builder::{CodeFragment, Renderable};

/// `export const <name> = [ ... ];` declaration.
///
/// The array is always rendered multi-line, even when empty:
///
/// ```text
/// export const resolvers = [
///   userResolver,
/// ];
/// ```
#[derive(Debug, Clone)]
pub struct ExportConst {
    name: String,
    value: JsArray,
}

impl ExportConst {
    pub fn new(name: impl Into<String>, value: JsArray) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl Renderable for ExportConst {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            format!("export const {} = [", self.name),
            self.value.element_lines(),
            Some("];".to_string()),
        )]
    }
}
