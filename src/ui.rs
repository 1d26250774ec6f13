//! User interface module - formatting and confirmation prompts

use std::io::{self, Write};

use anyhow::Result;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message);
}

/// Display the planned release.
///
/// Shows the current version, the computed next version, and the commit
/// range the changelog will cover (or a note that the whole history is in
/// scope when no prior tag exists).
///
/// # Arguments
/// * `current` - Version currently in the manifest
/// * `next` - The computed next version
/// * `range` - Changelog commit range ("" when no prior release exists)
pub fn display_release_plan(current: &str, next: &str, range: &str) {
    println!("\n\x1b[1mRelease plan:\x1b[0m");
    println!("  From: \x1b[31m{}\x1b[0m", current);
    println!("  To:   \x1b[32m{}\x1b[0m", next);
    if range.is_empty() {
        println!("  Changelog: entire history (no prior release)");
    } else {
        println!("  Changelog: {}", range);
    }
}

/// Prompts user to confirm an action with a yes/no prompt.
///
/// Accepts "y" or "yes" (case-insensitive) as confirmation. Default is "no"
/// if user presses Enter.
///
/// # Arguments
/// * `prompt` - The prompt message to display (without the "(y/N): " suffix)
///
/// # Returns
/// * `Ok(true)` - If user entered "y" or "yes"
/// * `Ok(false)` - Otherwise
pub fn confirm_action(prompt: &str) -> Result<bool> {
    print!("{} (y/N): ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let answer = input.trim().to_lowercase();

    Ok(answer == "y" || answer == "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_error() {
        // Visual verification test - output is printed to stderr
        display_error("test error");
    }

    #[test]
    fn test_display_success() {
        // Visual verification test - output is printed to stdout
        display_success("test success");
    }

    #[test]
    fn test_display_release_plan() {
        display_release_plan("1.0.0", "2.0.0-alpha.0", "v1.0.0..HEAD");
        display_release_plan("0.1.0", "0.1.1-alpha.0", "");
    }
}
