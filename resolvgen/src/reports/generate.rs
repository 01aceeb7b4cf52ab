//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from aggregator generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Identifier collision warnings.
    pub warnings: Vec<String>,
    /// Resolvers in emission order.
    pub resolvers: Vec<ResolverLine>,
    /// Generation result (file written or preview).
    pub result: GenerationResult,
}

/// A resolver file and the identifier bound to it.
#[derive(Debug)]
pub struct ResolverLine {
    pub file_name: String,
    pub identifier: String,
}

/// Result of generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// The file was written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when the aggregator was written.
#[derive(Debug)]
pub struct WrittenResult {
    /// Path of the written file.
    pub path: PathBuf,
    /// Number of resolvers aggregated.
    pub count: usize,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Path relative to the module directory.
    pub path: String,
    /// Content that would be written.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.section(&format!("Resolvers ({})", written.count));
        for resolver in &self.resolvers {
            out.list_item(&format!("{} as {}", resolver.file_name, resolver.identifier));
        }
        out.newline();
        out.key_value("Generated", &written.path.display().to_string());
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        out.divider(&preview.path);
        out.preformatted(&preview.content);
        out.divider("Summary");
        out.preformatted(&format!(
            "{} resolvers would be aggregated",
            self.resolvers.len()
        ));
    }
}
