//! TypeScript AST builders for the statements found in generated barrel files.
//!
//! Each node renders to [`CodeFragment`](crate::builder::CodeFragment)s,
//! which are written out by [`CodeBuilder`](crate::builder::CodeBuilder).

mod arrays;
mod consts;
mod imports;

pub use arrays::JsArray;
pub use consts::ExportConst;
pub use imports::Import;
