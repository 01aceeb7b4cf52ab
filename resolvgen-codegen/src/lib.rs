//! Resolver aggregator generation for resolvgen.
//!
//! Scans `<module>/resolvers` and emits `<module>/<output>/resolvers.ts`, a
//! barrel file that imports every resolver module and re-exports them as a
//! single ordered array.
//!
//! # Usage
//!
//! ```ignore
//! use resolvgen_codegen::generate_resolvers;
//!
//! let count = generate_resolvers("src/modules/user", "generated")?;
//! println!("{count} resolvers aggregated");
//! ```
//!
//! # Module Organization
//!
//! - [`builder`] - Line-oriented code building blocks (CodeBuilder, CodeFragment)
//! - [`ast`] - TypeScript syntax nodes (Import, Const, JsArray)
//! - [`files`] - Generated file definitions (ResolversTs)

pub mod ast;
pub mod builder;
pub mod files;

mod generator;

pub use generator::{
    Collision, RESOLVERS_DIR, ResolverEntry, ResolversGenerator, generate_resolvers,
};
pub use resolvgen_core::File;
