//! Pure formatting functions for UI output.
//!
//! All display logic lives here, separated from user interaction.

use console::style;

use crate::git::CommitInfo;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Format and print a non-fatal warning.
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), message);
}

/// Display the filtered commits for an application's release.
///
/// Shows up to 10 entries from the provided list. If more exist, displays a
/// count of the remaining commits.
///
/// # Arguments
/// * `commits` - Filtered commit records to display
/// * `application` - The application being released
pub fn display_release_commits(commits: &[CommitInfo], application: &str) {
    println!(
        "\n{}",
        style(format!("Commits mentioning [{}]:", application)).bold()
    );

    for (i, commit) in commits.iter().take(10).enumerate() {
        // Truncate in chars, not bytes: subjects are not always ASCII
        let short: String = commit.summary().chars().take(60).collect();
        println!("  {}. {}", i + 1, short);
    }

    if commits.len() > 10 {
        println!("  ... and {} more commits", commits.len() - 10);
    }
}

/// Display the proposed tag change (or initial tag).
///
/// Shows either:
/// - If updating: "From: old_tag -> To: new_tag"
/// - If initial: "Initial Tag: new_tag"
///
/// # Arguments
/// * `old_tag` - Previous tag (None if this is the initial tag)
/// * `new_tag` - The new tag being proposed
pub fn display_proposed_tag(old_tag: Option<&str>, new_tag: &str) {
    match old_tag {
        Some(old) => {
            println!("\n{}", style("Proposed Tag Change:").bold());
            println!("  From: {}", style(old).red());
            println!("  To:   {}", style(new_tag).green());
        }
        None => {
            println!("\n{}", style("Initial Tag:").bold());
            println!("  New tag: {}", style(new_tag).green());
        }
    }
}

/// Display the manual tagging instruction for the prepared message file.
///
/// Shows the git command needed to actually cut the tag.
///
/// # Arguments
/// * `tag` - The tag the message file was prepared for
/// * `message_file` - Path of the written commit-message file
pub fn display_manual_tag_instruction(tag: &str, message_file: &str) {
    println!(
        "\n{} To cut this release, run:\n  {}",
        style("→").yellow(),
        style(format!("git tag -a {} -F {}", tag, message_file)).cyan()
    );
}
