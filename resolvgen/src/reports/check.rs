//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from collision checking.
#[derive(Debug)]
pub struct CheckReport {
    /// Module directory that was scanned.
    pub module_root: PathBuf,
    /// Number of resolver entries found.
    pub resolver_count: usize,
    /// One message per colliding identifier.
    pub collisions: Vec<String>,
}

impl CheckReport {
    /// Whether every resolver derives a distinct identifier.
    pub fn is_valid(&self) -> bool {
        self.collisions.is_empty()
    }

    /// Process exit status for the check command: 0 when valid, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_valid() { 0 } else { 1 }
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for collision in &self.collisions {
            out.warning(collision);
        }

        if self.is_valid() {
            out.preformatted(&format!(
                "✓ {} resolvers in {} have distinct identifiers",
                self.resolver_count,
                self.module_root.display()
            ));
        }
    }
}
