//! Resolver aggregator generation.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use eyre::{Context, Result, bail};
use resolvgen_core::{File, GeneratedFile, binding_identifier, ensure_dir, import_path, list_entries};

use crate::files::{OUTPUT_FILE, ResolversTs};

/// Name of the folder, under the module root, that holds resolver files.
pub const RESOLVERS_DIR: &str = "resolvers";

/// A resolver file and the names derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverEntry {
    /// Filename relative to the resolvers folder.
    pub file_name: String,
    /// Local binding used in both the import and the exported array.
    pub identifier: String,
    /// Module path relative to the resolvers folder, source suffix removed.
    pub import_path: String,
}

impl ResolverEntry {
    pub fn from_file_name(file_name: impl Into<String>) -> Self {
        let file_name = file_name.into();
        Self {
            identifier: binding_identifier(&file_name),
            import_path: import_path(&file_name).to_string(),
            file_name,
        }
    }
}

/// Several resolver files that derive the same identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub identifier: String,
    pub file_names: Vec<String>,
}

/// Generates `<module>/<output>/resolvers.ts` from `<module>/resolvers`.
#[derive(Debug)]
pub struct ResolversGenerator {
    module_root: PathBuf,
    output_folder: PathBuf,
    entries: Vec<ResolverEntry>,
}

impl ResolversGenerator {
    /// Scan the resolvers folder of `module_root`.
    ///
    /// Fails when `output_folder` is absolute or the folder cannot be listed;
    /// nothing is written.
    pub fn new(module_root: impl AsRef<Path>, output_folder: impl AsRef<Path>) -> Result<Self> {
        let output_folder = output_folder.as_ref();
        if output_folder.is_absolute() {
            bail!(
                "Output folder {} must be relative to the module root",
                output_folder.display()
            );
        }

        let module_root = module_root.as_ref().to_path_buf();
        let resolvers_dir = module_root.join(RESOLVERS_DIR);

        let entries = list_entries(&resolvers_dir)
            .wrap_err("Failed to list resolver files")?
            .into_iter()
            .map(ResolverEntry::from_file_name)
            .collect();

        Ok(Self {
            module_root,
            output_folder: output_folder.to_path_buf(),
            entries,
        })
    }

    /// Resolver entries in emission order.
    pub fn entries(&self) -> &[ResolverEntry] {
        &self.entries
    }

    /// Directory the aggregator file is written to.
    pub fn output_dir(&self) -> PathBuf {
        self.module_root.join(&self.output_folder)
    }

    /// Path of the aggregator file relative to the module root.
    pub fn relative_output_path(&self) -> PathBuf {
        self.output_folder.join(OUTPUT_FILE)
    }

    /// Identifiers derived from more than one file, sorted by identifier.
    ///
    /// Generation does not resolve these; the emitted file binds the same
    /// name twice.
    pub fn collisions(&self) -> Vec<Collision> {
        let mut by_identifier: BTreeMap<&str, Vec<String>> = BTreeMap::new();
        for entry in &self.entries {
            by_identifier
                .entry(entry.identifier.as_str())
                .or_default()
                .push(entry.file_name.clone());
        }

        by_identifier
            .into_iter()
            .filter(|(_, files)| files.len() > 1)
            .map(|(identifier, file_names)| Collision {
                identifier: identifier.to_string(),
                file_names,
            })
            .collect()
    }

    /// Render the aggregator without touching the filesystem.
    pub fn preview(&self) -> File {
        File::new(
            self.relative_output_path(),
            ResolversTs::new(&self.entries).render(),
        )
    }

    /// Write the aggregator file, creating the output folder if needed.
    ///
    /// Returns the number of resolver entries aggregated.
    pub fn generate(&self) -> Result<usize> {
        let output_dir = self.output_dir();
        ensure_dir(&output_dir)?;
        ResolversTs::new(&self.entries)
            .write(&output_dir)
            .wrap_err("Failed to write resolvers aggregator")?;
        Ok(self.entries.len())
    }
}

/// Regenerate `<module_root>/<output_folder>/resolvers.ts` and return how
/// many resolver files it aggregates.
pub fn generate_resolvers(
    module_root: impl AsRef<Path>,
    output_folder: impl AsRef<Path>,
) -> Result<usize> {
    ResolversGenerator::new(module_root, output_folder)?.generate()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn module_with(files: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        let resolvers = temp.path().join(RESOLVERS_DIR);
        fs::create_dir(&resolvers).unwrap();
        for name in files {
            fs::write(resolvers.join(name), "export const resolvers = {};").unwrap();
        }
        temp
    }

    #[test]
    fn test_entry_from_file_name() {
        let entry = ResolverEntry::from_file_name("user.resolver.ts");
        assert_eq!(entry.file_name, "user.resolver.ts");
        assert_eq!(entry.identifier, "userresolver");
        assert_eq!(entry.import_path, "user.resolver");
    }

    #[test]
    fn test_entries_sorted() {
        let module = module_with(&["userResolver.ts", "orderResolver.ts"]);
        let generator = ResolversGenerator::new(module.path(), "generated").unwrap();

        let names: Vec<_> = generator
            .entries()
            .iter()
            .map(|e| e.file_name.as_str())
            .collect();
        assert_eq!(names, vec!["orderResolver.ts", "userResolver.ts"]);
    }

    #[test]
    fn test_collisions() {
        let module = module_with(&["user-resolver.ts", "user.resolver.ts", "order.ts"]);
        let generator = ResolversGenerator::new(module.path(), "generated").unwrap();

        assert_eq!(
            generator.collisions(),
            vec![Collision {
                identifier: "userresolver".to_string(),
                file_names: vec![
                    "user-resolver.ts".to_string(),
                    "user.resolver.ts".to_string()
                ],
            }]
        );
    }

    #[test]
    fn test_no_collisions() {
        let module = module_with(&["a.ts", "b.ts"]);
        let generator = ResolversGenerator::new(module.path(), "generated").unwrap();
        assert!(generator.collisions().is_empty());
    }

    #[test]
    fn test_preview_does_not_write() {
        let module = module_with(&["a.ts"]);
        let generator = ResolversGenerator::new(module.path(), "generated").unwrap();

        let file = generator.preview();

        assert_eq!(file.path(), Path::new("generated/resolvers.ts"));
        assert!(file.content().contains("import { resolvers as a }"));
        assert!(!module.path().join("generated").exists());
    }

    #[test]
    fn test_absolute_output_folder_is_rejected() {
        let module = module_with(&["a.ts"]);
        let elsewhere = TempDir::new().unwrap();

        let err = ResolversGenerator::new(module.path(), elsewhere.path()).unwrap_err();

        assert!(err.to_string().contains("must be relative to the module root"));
        assert!(!elsewhere.path().join(OUTPUT_FILE).exists());
    }

    #[test]
    fn test_generate_returns_count() {
        let module = module_with(&["a.ts", "b.ts", "c.ts"]);
        let count = generate_resolvers(module.path(), "generated").unwrap();
        assert_eq!(count, 3);
        assert!(module.path().join("generated/resolvers.ts").is_file());
    }
}
