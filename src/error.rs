//! Error types for ai-reply-extract.
//!
//! Classification never fails: an ambiguous element is a valid `uncertain`
//! verdict. Errors are reserved for unsupported pages, empty pages,
//! configuration faults and the export boundary.

/// Error type for locate and export operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No site profile is registered for this host.
    #[error("Unsupported host: {0}")]
    UnsupportedHost(String),

    /// The page URL could not be parsed or has no host.
    #[error("Invalid page URL: {0}")]
    InvalidUrl(String),

    /// No candidate selector produced a plausible response region.
    #[error("No response region found")]
    NoResponseRegion,

    /// A configured selector is not valid CSS.
    #[error("Invalid selector `{selector}`: {reason}")]
    InvalidSelector {
        /// The offending selector text.
        selector: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Site configuration could not be loaded.
    #[error("Site configuration error: {0}")]
    Config(String),

    /// The clipboard or export collaborator failed.
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

/// Failure reported by a clipboard or file-export collaborator.
///
/// Kept separate from [`Error`] so a host application can tell a failed
/// write apart from a page where nothing was found.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    /// The collaborator refused the write (permissions, focus, quota).
    #[error("write rejected: {0}")]
    Rejected(String),

    /// Nothing to write after sanitizing.
    #[error("sanitized text is empty")]
    EmptyText,

    /// Serializing the export document failed.
    #[error("serialization failed: {0}")]
    Serialize(String),
}

/// Result type alias for locate operations.
pub type Result<T> = std::result::Result<T, Error>;
