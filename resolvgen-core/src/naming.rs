//! Filename transformations used when emitting imports.

/// Source-type suffix stripped from resolver filenames.
pub const SOURCE_SUFFIX: &str = ".ts";

/// Strip the trailing source suffix, leaving any other dotted segments.
///
/// `"user.resolver.ts"` -> `"user.resolver"`. Names without the suffix are
/// returned unchanged.
pub fn import_path(file_name: &str) -> &str {
    file_name.strip_suffix(SOURCE_SUFFIX).unwrap_or(file_name)
}

/// Derive a local binding name from a resolver filename.
///
/// The source suffix is removed first, then every character that cannot
/// appear in a JavaScript identifier (`.`, `-`, spaces, ...) is dropped:
/// `"user.resolver.ts"` -> `"userresolver"`.
pub fn binding_identifier(file_name: &str) -> String {
    import_path(file_name)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '$')
        .collect()
}
