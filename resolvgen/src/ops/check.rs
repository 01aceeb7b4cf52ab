//! Check operation - identifier collision detection.

use std::path::Path;

use eyre::{Context, Result};
use resolvgen_codegen::ResolversGenerator;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Scans the resolvers folder and reports identifiers derived from more than
/// one file. Nothing is written.
pub fn check(module_root: &Path) -> Result<CheckReport> {
    // The output folder is irrelevant when nothing is written.
    let generator = ResolversGenerator::new(module_root, "")
        .wrap_err_with(|| format!("Failed to scan module {}", module_root.display()))?;

    Ok(CheckReport {
        module_root: module_root.to_path_buf(),
        resolver_count: generator.entries().len(),
        collisions: collision_warnings(&generator),
    })
}

/// One message per colliding identifier.
pub(crate) fn collision_warnings(generator: &ResolversGenerator) -> Vec<String> {
    generator
        .collisions()
        .into_iter()
        .map(|c| {
            format!(
                "identifier `{}` is derived from {}",
                c.identifier,
                c.file_names.join(", ")
            )
        })
        .collect()
}
