//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for `portico.toml` field paths.
///
/// Diagnostics carry the dotted path of the offending field (e.g.
/// `docs.publisher.awsS3.bucket_name`) so errors point at the exact key
/// to fix.
///
/// # Example
///
/// ```ignore
/// diag.error(
///     FieldPath::new("docs.publisher.awsS3.bucket_name"),
///     "must not be empty",
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
