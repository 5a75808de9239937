use crate::error::{Result, TagReleaseError};
use crate::git::CommitInfo;
use git2::{Oid, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Resolve a tag name to the commit it points at
    ///
    /// Handles both lightweight and annotated tags.
    fn find_tag_oid(&self, tag_name: &str) -> Result<Option<Oid>> {
        let reference_name = format!("refs/tags/{}", tag_name);

        match self.repo.find_reference(&reference_name) {
            Ok(reference) => {
                let oid = reference
                    .peel(git2::ObjectType::Commit)
                    .map_err(TagReleaseError::Git)?
                    .id();

                Ok(Some(oid))
            }
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) => Err(TagReleaseError::Git(e)),
        }
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn commits_since(&self, since_tag: Option<&str>) -> Result<Vec<CommitInfo>> {
        let head_oid = self.repo.head()?.peel_to_commit()?.id();

        let stop_oid = match since_tag {
            Some(tag_name) => match self.find_tag_oid(tag_name)? {
                Some(oid) => Some(oid),
                None => {
                    return Err(TagReleaseError::Git(git2::Error::from_str(&format!(
                        "tag '{}' not found",
                        tag_name
                    ))))
                }
            },
            None => None,
        };

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(head_oid)?;

        let mut commits = Vec::new();

        for oid_result in revwalk {
            let oid = oid_result?;

            if Some(oid) == stop_oid {
                break;
            }

            let commit = self.repo.find_commit(oid)?;
            let subject = commit.summary().unwrap_or("(empty message)").to_string();

            commits.push(CommitInfo {
                hash: oid.to_string()[..7].to_string(),
                subject,
            });
        }

        Ok(commits)
    }
}

// SAFETY: Git2Repository wraps git2::Repository which is Send + Sync.
// git2 library is thread-safe for read operations via libgit2's thread-safe design.
unsafe impl Sync for Git2Repository {}
