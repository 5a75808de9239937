use crate::error::Result;
use crate::git::{CommitInfo, Repository};
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
///
/// Commits are held newest first, the way [Repository::commits_since]
/// returns them.
pub struct MockRepository {
    tags: Vec<String>,
    commits: Vec<CommitInfo>,
    tag_heads: HashMap<String, String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            tags: Vec::new(),
            commits: Vec::new(),
            tag_heads: HashMap::new(),
        }
    }

    /// Add a tag name to the namespace
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }

    /// Add a tag pointing at the commit with the given hash
    pub fn add_tag_at(&mut self, name: impl Into<String>, hash: impl Into<String>) {
        let name = name.into();
        self.tags.push(name.clone());
        self.tag_heads.insert(name, hash.into());
    }

    /// Append a commit (newest first)
    pub fn add_commit(&mut self, hash: impl Into<String>, subject: impl Into<String>) {
        self.commits.push(CommitInfo {
            hash: hash.into(),
            subject: subject.into(),
        });
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.clone())
    }

    fn commits_since(&self, since_tag: Option<&str>) -> Result<Vec<CommitInfo>> {
        let stop_hash = since_tag.and_then(|tag| self.tag_heads.get(tag));

        let mut commits = Vec::new();
        for commit in &self.commits {
            if Some(&commit.hash) == stop_hash {
                break;
            }
            commits.push(commit.clone());
        }

        Ok(commits)
    }
}
