//! Next-version resolution from the existing tag namespace
//!
//! Pure computation: receives tags as already-retrieved data and never
//! consults the repository itself.

use crate::domain::{AppTag, Version, VersionBump};
use crate::error::{Result, TagReleaseError};
use crate::git::CommitInfo;

/// Outcome of resolving the next release tag for an application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The tag to be created for this release
    pub new_tag: AppTag,
    /// The highest existing tag for the application, if any
    pub previous_tag: Option<AppTag>,
}

/// Compute the next tag for an application from the existing tag namespace.
///
/// Tags are matched by the `{application}-` prefix and compared as numeric
/// (major, minor, patch) tuples, so `svc-1.10.0` is newer than `svc-1.9.0`.
/// With no prior tag the initial version is fixed at `0.0.1` regardless of
/// the requested bump.
///
/// # Errors
/// * [TagReleaseError::Usage] - empty application name
/// * [TagReleaseError::AmbiguousApplication] - application name contains the
///   tag separator `-`
/// * [TagReleaseError::MalformedTag] - a prefix-matched tag whose suffix does
///   not parse as `X.Y.Z`
pub fn resolve_next(
    application: &str,
    bump: VersionBump,
    existing_tags: &[String],
) -> Result<Resolution> {
    if application.is_empty() {
        return Err(TagReleaseError::usage("application name must not be empty"));
    }
    if application.contains('-') {
        return Err(TagReleaseError::AmbiguousApplication(
            application.to_string(),
        ));
    }

    let prefix = format!("{}-", application);

    let mut latest: Option<AppTag> = None;
    for tag in existing_tags {
        if !tag.starts_with(&prefix) {
            continue;
        }

        // A prefix-matched tag must round-trip as {application}-X.Y.Z; a
        // parse that yields a longer application name means the suffix after
        // our prefix is not a bare version
        let parsed = AppTag::parse(tag)?;
        if parsed.application != application {
            return Err(TagReleaseError::malformed_tag(
                tag,
                "version suffix is not X.Y.Z",
            ));
        }

        if latest.as_ref().map_or(true, |t| parsed.version > t.version) {
            latest = Some(parsed);
        }
    }

    match latest {
        Some(previous) => Ok(Resolution {
            new_tag: AppTag::new(application, previous.version.bump(&bump)),
            previous_tag: Some(previous),
        }),
        None => Ok(Resolution {
            new_tag: AppTag::new(application, Version::new(0, 0, 1)),
            previous_tag: None,
        }),
    }
}

/// Revision range to scan for release notes: `HEAD` alone for a first
/// release, otherwise `{previous_tag}..HEAD`.
pub fn revision_range(previous_tag: Option<&AppTag>) -> String {
    match previous_tag {
        Some(tag) => format!("{}..HEAD", tag),
        None => "HEAD".to_string(),
    }
}

/// Select the commits relevant to an application.
///
/// Order-preserving filter keeping records whose subject contains the
/// literal marker `[{application}]`. Empty input yields empty output.
pub fn filter_release_commits(commits: &[CommitInfo], application: &str) -> Vec<CommitInfo> {
    let marker = format!("[{}]", application);

    commits
        .iter()
        .filter(|commit| commit.subject.contains(&marker))
        .cloned()
        .collect()
}
