use thiserror::Error;

/// Errors raised while resolving an appearance against a theme.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// The appearance id has no entry in the theme being resolved.
    ///
    /// Raised in [`ResolveMode::Strict`](crate::ResolveMode::Strict);
    /// permissive resolution degrades the lookup to "no styling" instead.
    #[error("missing appearance entry: {0}")]
    MissingEntry(String),

    /// An `include` chain exceeded the recursion limit.
    ///
    /// A well-formed theme never nests deeper than a handful of entries, so
    /// hitting the limit means the theme delegates in a cycle.
    #[error("include cycle detected while resolving appearance entry: {0}")]
    CyclicInclude(String),
}
