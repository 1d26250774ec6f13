use crate::error::{ReleaseError, Result};
use std::fmt;
use std::str::FromStr;

/// Which version component a new release line bumps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseType {
    Major,
    Minor,
    Patch,
}

impl FromStr for ReleaseType {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "major" => Ok(ReleaseType::Major),
            "minor" => Ok(ReleaseType::Minor),
            "patch" => Ok(ReleaseType::Patch),
            other => Err(ReleaseError::invalid_release_type(format!(
                "'{}' - expected major, minor, or patch",
                other
            ))),
        }
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseType::Major => write!(f, "major"),
            ReleaseType::Minor => write!(f, "minor"),
            ReleaseType::Patch => write!(f, "patch"),
        }
    }
}
