//! Generate operation - write the resolvers aggregator.

use std::path::Path;

use eyre::{Context, Result};
use resolvgen_codegen::ResolversGenerator;

use crate::reports::{GenerateReport, GenerationResult, PreviewResult, ResolverLine, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Module directory containing the `resolvers` folder.
    pub module_root: &'a Path,
    /// Output folder, relative to the module directory.
    pub output_folder: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(opts: GenerateOptions) -> Result<GenerateReport> {
    let generator = ResolversGenerator::new(opts.module_root, opts.output_folder)
        .wrap_err_with(|| format!("Failed to scan module {}", opts.module_root.display()))?;

    let result = if opts.dry_run {
        let file = generator.preview();
        GenerationResult::Preview(PreviewResult {
            path: file.path().display().to_string(),
            content: file.content().to_string(),
        })
    } else {
        let count = generator
            .generate()
            .wrap_err("Failed to generate resolvers aggregator")?;
        GenerationResult::Written(WrittenResult {
            path: opts.module_root.join(generator.relative_output_path()),
            count,
        })
    };

    Ok(GenerateReport {
        warnings: super::check::collision_warnings(&generator),
        resolvers: generator
            .entries()
            .iter()
            .map(|e| ResolverLine {
                file_name: e.file_name.clone(),
                identifier: e.identifier.clone(),
            })
            .collect(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn module_with(files: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        let resolvers = temp.path().join("resolvers");
        fs::create_dir(&resolvers).unwrap();
        for name in files {
            fs::write(resolvers.join(name), "").unwrap();
        }
        temp
    }

    #[test]
    fn test_generate_writes_file() {
        let module = module_with(&["userResolver.ts", "orderResolver.ts"]);

        let report = generate(GenerateOptions {
            module_root: module.path(),
            output_folder: Path::new("generated"),
            dry_run: false,
        })
        .unwrap();

        match report.result {
            GenerationResult::Written(written) => {
                assert_eq!(written.count, 2);
                assert_eq!(written.path, module.path().join("generated/resolvers.ts"));
                assert!(written.path.is_file());
            }
            GenerationResult::Preview(_) => panic!("Expected written result"),
        }
        assert!(report.warnings.is_empty());
        assert_eq!(report.resolvers.len(), 2);
        assert_eq!(report.resolvers[0].file_name, "orderResolver.ts");
    }

    #[test]
    fn test_dry_run_does_not_write() {
        let module = module_with(&["a.ts"]);

        let report = generate(GenerateOptions {
            module_root: module.path(),
            output_folder: Path::new("generated"),
            dry_run: true,
        })
        .unwrap();

        match report.result {
            GenerationResult::Preview(preview) => {
                assert!(preview.content.contains("'../resolvers/a'"));
            }
            GenerationResult::Written(_) => panic!("Expected preview result"),
        }
        assert!(!module.path().join("generated").exists());
    }

    #[test]
    fn test_collisions_become_warnings() {
        let module = module_with(&["a-b.ts", "a.b.ts"]);

        let report = generate(GenerateOptions {
            module_root: module.path(),
            output_folder: Path::new("generated"),
            dry_run: true,
        })
        .unwrap();

        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("ab"));
    }

    #[test]
    fn test_missing_module_fails() {
        let temp = TempDir::new().unwrap();

        let err = generate(GenerateOptions {
            module_root: &temp.path().join("missing"),
            output_folder: Path::new("generated"),
            dry_run: false,
        })
        .unwrap_err();

        assert!(err.to_string().contains("Failed to scan module"));
    }
}
