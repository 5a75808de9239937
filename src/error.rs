use thiserror::Error;

/// Unified error type for tag-release operations
#[derive(Error, Debug)]
pub enum TagReleaseError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Malformed tag '{tag}': {reason}")]
    MalformedTag { tag: String, reason: String },

    #[error("Ambiguous application name '{0}': must not contain '-'")]
    AmbiguousApplication(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in tag-release
pub type Result<T> = std::result::Result<T, TagReleaseError>;

impl TagReleaseError {
    /// Create a usage error with context
    pub fn usage(msg: impl Into<String>) -> Self {
        TagReleaseError::Usage(msg.into())
    }

    /// Create a malformed-tag error with context
    pub fn malformed_tag(tag: impl Into<String>, reason: impl Into<String>) -> Self {
        TagReleaseError::MalformedTag {
            tag: tag.into(),
            reason: reason.into(),
        }
    }

    /// Create an editor error with context
    pub fn editor(msg: impl Into<String>) -> Self {
        TagReleaseError::Editor(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        TagReleaseError::Config(msg.into())
    }
}
