//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, Write};

use crate::error::Result;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_error, display_manual_tag_instruction, display_proposed_tag, display_release_commits,
    display_status, display_success, display_warning,
};

/// Asks whether to go ahead and prepare the named release.
///
/// Accepts "y" or "yes" (case-insensitive) as confirmation; anything else,
/// including a bare Enter, declines.
///
/// # Arguments
/// * `new_tag` - The tag the release message file would be prepared for
///
/// # Returns
/// * `Ok(true)` - If user entered "y" or "yes"
/// * `Ok(false)` - Otherwise (including Enter, or "n"/"no")
/// * `Err` - If input error occurs
pub fn confirm_release(new_tag: &str) -> Result<bool> {
    print!("\nPrepare release {}? (y/N): ", new_tag);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
