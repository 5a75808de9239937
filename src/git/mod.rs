//! Git operations abstraction layer
//!
//! Provides a trait-based abstraction over the two git capabilities the
//! release workflow consumes: tag enumeration and one-line commit history.
//! Concrete implementations:
//!
//! - [repository::Git2Repository]: a real implementation using the `git2` crate
//! - [mock::MockRepository]: a mock implementation for testing
//!
//! Most code should depend on the [Repository] trait rather than concrete
//! implementations to enable easy testing.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// One line of commit history: short identifier plus subject line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    /// Abbreviated commit hash
    pub hash: String,
    /// First line of the commit message
    pub subject: String,
}

impl CommitInfo {
    /// Render the record the way `git log --oneline` prints it
    pub fn summary(&self) -> String {
        format!("{} {}", self.hash, self.subject)
    }
}

/// Common git operation trait for abstraction
///
/// The release workflow only reads history: it enumerates tags and lists
/// commit summaries for a revision range. Tag creation is deliberately
/// absent; cutting the actual tag is left to the caller after the
/// commit-message file is prepared.
pub trait Repository: Send + Sync {
    /// Get all tag names in the repository
    ///
    /// Order is unspecified; callers that care about ordering sort the
    /// returned names themselves.
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Get one-line commit summaries for the release revision range
    ///
    /// With `since_tag = Some(tag)` this covers `tag..HEAD` (the tag's own
    /// commit excluded); with `None` it covers everything reachable from
    /// `HEAD`. Commits are returned newest first, the way `git log` prints
    /// them.
    fn commits_since(&self, since_tag: Option<&str>) -> Result<Vec<CommitInfo>>;
}
