//! resolvers.ts aggregator generator.

use std::path::{Path, PathBuf};

use resolvgen_core::GeneratedFile;

use crate::{
    ResolverEntry,
    ast::{ExportConst, Import, JsArray},
    builder::CodeBuilder,
};

/// Name of the generated aggregator file.
pub const OUTPUT_FILE: &str = "resolvers.ts";

/// Module specifier prefix of every resolver import, relative to the output folder.
pub const IMPORT_PREFIX: &str = "../resolvers/";

/// Member imported from each resolver module and exported by the aggregator.
pub const EXPORTED_MEMBER: &str = "resolvers";

/// The resolvers.ts barrel file.
///
/// Imports `resolvers` from every entry under a local alias, then exports the
/// aliases as one array in entry order.
pub struct ResolversTs<'a> {
    entries: &'a [ResolverEntry],
}

impl<'a> ResolversTs<'a> {
    pub fn new(entries: &'a [ResolverEntry]) -> Self {
        Self { entries }
    }

    /// Generated lines, without terminators.
    pub fn lines(&self) -> Vec<String> {
        let mut builder = CodeBuilder::typescript();

        for entry in self.entries {
            builder.emit(&Import::aliased(
                EXPORTED_MEMBER,
                &entry.identifier,
                format!("{}{}", IMPORT_PREFIX, entry.import_path),
            ));
        }

        // The separator is emitted even when there are no imports.
        builder.push_blank();

        let elements = JsArray::from_raw(self.entries.iter().map(|e| e.identifier.as_str()));
        builder.emit(&ExportConst::new(EXPORTED_MEMBER, elements));

        builder.into_lines()
    }
}

impl GeneratedFile for ResolversTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(OUTPUT_FILE)
    }

    fn render(&self) -> String {
        self.lines().join("\n")
    }
}
