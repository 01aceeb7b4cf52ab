//! Generated file definitions.

mod resolvers_ts;

pub use resolvers_ts::{EXPORTED_MEMBER, IMPORT_PREFIX, OUTPUT_FILE, ResolversTs};
