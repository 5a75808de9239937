//! Release message acquisition and commit-message artifact composition
//!
//! The scratch file handed to the editor is a [tempfile::NamedTempFile], so
//! it is removed on every exit path, including failures.

use std::env;
use std::fs;
use std::io::Write as _;
use std::path::Path;
use std::process::Command;

use crate::domain::AppTag;
use crate::error::{Result, TagReleaseError};
use crate::git::CommitInfo;

const SCRATCH_TEMPLATE: &str =
    "\n# Describe this release.\n# Lines starting with '#' are ignored; an empty message aborts.\n";

/// Pick the editor program: `$EDITOR` if set, otherwise the configured fallback.
pub fn resolve_editor(fallback: &str) -> String {
    env::var("EDITOR").unwrap_or_else(|_| fallback.to_string())
}

/// Obtain the release message, either from the `-m` flag or interactively.
pub fn acquire_message(provided: Option<String>, editor: &str) -> Result<String> {
    let message = match provided {
        Some(text) => text.trim().to_string(),
        None => edit_message(editor)?,
    };

    if message.is_empty() {
        return Err(TagReleaseError::editor("aborting due to empty release message"));
    }

    Ok(message)
}

/// Open a scratch file in the given editor and return the cleaned-up text.
///
/// Blocks until the editor process exits. Comment lines are stripped and the
/// result trimmed; deciding whether an empty result aborts is the caller's
/// concern.
pub fn edit_message(editor: &str) -> Result<String> {
    let mut scratch = tempfile::NamedTempFile::new()?;
    scratch.write_all(SCRATCH_TEMPLATE.as_bytes())?;
    scratch.flush()?;

    let status = Command::new(editor)
        .arg(scratch.path())
        .status()
        .map_err(|e| TagReleaseError::editor(format!("failed to launch '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(TagReleaseError::editor(format!(
            "'{}' exited with status {}",
            editor, status
        )));
    }

    let content = fs::read_to_string(scratch.path())?;
    Ok(strip_comments(&content))
}

fn strip_comments(content: &str) -> String {
    content
        .lines()
        .filter(|line| !line.starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Compose the commit-message artifact: tag line, blank line, free text.
///
/// The filtered commit list is intentionally not part of this rendering; see
/// [compose_with_commits] for the opt-in richer form.
pub fn compose(new_tag: &AppTag, message: &str) -> String {
    format!("{}\n\n{}", new_tag, message)
}

/// Compose the artifact with the filtered commit list appended as bullets.
pub fn compose_with_commits(new_tag: &AppTag, message: &str, commits: &[CommitInfo]) -> String {
    let mut content = compose(new_tag, message);

    if !commits.is_empty() {
        content.push_str("\n\n");
        for commit in commits {
            content.push_str(&format!("- {}\n", commit.summary()));
        }
        // Drop the newline the final bullet added
        content.pop();
    }

    content
}

/// Write the composed artifact, overwriting any previous run's file.
pub fn write_message_file(path: impl AsRef<Path>, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
