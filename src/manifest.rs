//! Package manifest access
//!
//! Reads the current version from a Cargo.toml `[package]` table and writes
//! the bumped version back. Writing is line-based so the rest of the manifest
//! keeps its formatting.

use crate::error::{ReleaseError, Result};
use std::fs;
use std::path::Path;

/// Read the package version from a manifest file.
///
/// # Arguments
/// * `path` - Path to the Cargo.toml
///
/// # Returns
/// * `Ok(String)` - The version string from the `[package]` table
/// * `Err` - If the file is unreadable, is not valid TOML, or has no version
pub fn read_version(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)
        .map_err(|e| ReleaseError::manifest(format!("{}: {}", path.display(), e)))?;

    value
        .get("package")
        .and_then(|pkg| pkg.get("version"))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| {
            ReleaseError::manifest(format!(
                "{}: no [package] version field",
                path.display()
            ))
        })
}

/// Write a new package version into a manifest file.
///
/// Replaces the `version` entry inside the `[package]` section in place,
/// leaving every other line untouched.
pub fn write_version(path: &Path, new_version: &str) -> Result<()> {
    let content = fs::read_to_string(path)?;

    let mut in_package = false;
    let mut replaced = false;
    let lines: Vec<String> = content
        .lines()
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.starts_with('[') {
                in_package = trimmed == "[package]";
            } else if in_package && !replaced && trimmed.starts_with("version") {
                if let Some((key, _)) = line.split_once('=') {
                    replaced = true;
                    return format!("{}= \"{}\"", key, new_version);
                }
            }
            line.to_string()
        })
        .collect();

    if !replaced {
        return Err(ReleaseError::manifest(format!(
            "{}: no [package] version field to update",
            path.display()
        )));
    }

    let mut output = lines.join("\n");
    if content.ends_with('\n') {
        output.push('\n');
    }
    fs::write(path, output)?;

    Ok(())
}
