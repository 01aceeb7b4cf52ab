//! Directory listing.

use std::path::Path;

use eyre::{Context, Result, eyre};

/// List the names of all entries directly inside `dir`.
///
/// Subdirectories are returned like files and are not descended into.
/// Names are sorted by byte order so the result does not depend on the
/// platform's native listing order.
pub fn list_entries(dir: &Path) -> Result<Vec<String>> {
    let read_dir = std::fs::read_dir(dir)
        .wrap_err_with(|| format!("Failed to read directory {}", dir.display()))?;

    let mut names = Vec::new();
    for entry in read_dir {
        let entry =
            entry.wrap_err_with(|| format!("Failed to read entry in {}", dir.display()))?;
        let name = entry.file_name().into_string().map_err(|raw| {
            eyre!(
                "Entry {:?} in {} is not valid UTF-8",
                raw,
                dir.display()
            )
        })?;
        names.push(name);
    }

    names.sort();
    Ok(names)
}
