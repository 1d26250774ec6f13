//! Shell execution collaborator
//!
//! Runs the external commands a release needs (package manager, changelog
//! tooling) with an environment that prefers locally installed tool binaries.
//! Failures surface as [`ReleaseError::Command`] carrying the child's exit
//! code; deciding whether to terminate the process is left to the CLI entry
//! point so this module stays testable.

use crate::error::{ReleaseError, Result};
use regex::Regex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Platform flavor for environment normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Unix,
    Windows,
}

impl Platform {
    /// Platform the process is running on
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    fn path_separator(self) -> char {
        match self {
            Platform::Unix => ':',
            Platform::Windows => ';',
        }
    }
}

/// Build an environment map that prefers local tool binaries.
///
/// Takes the platform and base environment explicitly so behavior is
/// deterministic under test. On Windows, keys are uppercased because
/// environment variable names there are case-insensitive ("Path" and "PATH"
/// are the same variable). The local binary directory is prepended to PATH
/// with the platform's path separator.
pub fn modified_env(
    platform: Platform,
    base_env: &HashMap<String, String>,
    local_bin: &Path,
) -> HashMap<String, String> {
    let mut env: HashMap<String, String> = base_env
        .iter()
        .map(|(key, value)| {
            let compat_key = match platform {
                Platform::Windows => key.to_uppercase(),
                Platform::Unix => key.clone(),
            };
            (compat_key, value.clone())
        })
        .collect();

    let local = local_bin.display().to_string();
    let path = match env.get("PATH") {
        Some(existing) => format!("{}{}{}", local, platform.path_separator(), existing),
        None => local,
    };
    env.insert("PATH".to_string(), path);

    env
}

/// Replace one-time-password values in a command with a placeholder.
///
/// Used before logging so `npm publish --otp=123456` never lands in output
/// with the password intact.
pub fn redact_otp(command: &str) -> String {
    // The pattern is fixed and known-valid
    let re = Regex::new(r"--otp=\d+").unwrap();
    re.replace_all(command, "--otp=(redacted)").into_owned()
}

/// Executes release commands through the system shell
pub struct Shell {
    local_bin: PathBuf,
}

impl Shell {
    /// Create a shell executor preferring binaries from `local_bin`
    pub fn new(local_bin: impl Into<PathBuf>) -> Self {
        Shell {
            local_bin: local_bin.into(),
        }
    }

    /// Execute a command and return its captured stdout.
    ///
    /// # Arguments
    /// * `command` - Command line to run through the system shell
    ///
    /// # Returns
    /// * `Ok(String)` - The command's stdout
    /// * `Err(ReleaseError::Command)` - On non-zero exit, with the child's
    ///   exit code and captured stderr
    pub fn run(&self, command: &str) -> Result<String> {
        let base_env: HashMap<String, String> = std::env::vars().collect();
        let env = modified_env(Platform::current(), &base_env, &self.local_bin);

        let output = shell_command(command).env_clear().envs(&env).output()?;

        if !output.status.success() {
            return Err(ReleaseError::Command {
                command: command.to_string(),
                code: output.status.code().unwrap_or(1),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Execute a command, printing the redacted command line and its output
    pub fn run_verbose(&self, command: &str) -> Result<()> {
        println!("+ {}", redact_otp(command));
        let output = self.run(command)?;
        println!("{}", output);
        Ok(())
    }
}

fn shell_command(command: &str) -> Command {
    if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", command]);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", command]);
        cmd
    }
}
