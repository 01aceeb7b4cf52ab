//! TypeScript import builder.

use crate::builder::{CodeFragment, Renderable};

/// An aliased named import with a single-quoted module specifier:
///
/// ```text
/// import { resolvers as userResolver } from '../resolvers/userResolver';
/// ```
#[derive(Debug, Clone)]
pub struct Import {
    name: String,
    alias: String,
    from: String,
}

impl Import {
    /// Import the export `name` from `from`, bound locally as `alias`.
    pub fn aliased(
        name: impl Into<String>,
        alias: impl Into<String>,
        from: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            alias: alias.into(),
            from: from.into(),
        }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "import {{ {} as {} }} from '{}';",
            self.name, self.alias, self.from
        ))]
    }
}
