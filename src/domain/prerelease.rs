//! Pre-release component handling for semantic versioning
//!
//! A pre-release component always carries an identifier (alpha, beta, rc, or
//! custom) and an iteration counter, e.g. "alpha.0" or "rc.3". The identifier
//! precedence (alpha < beta < rc < custom) drives version ordering.

use crate::error::{ReleaseError, Result};
use std::fmt;
use std::str::FromStr;

/// Pre-release identifier type (alpha, beta, rc, or custom)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum PreReleaseType {
    /// Alpha pre-release
    Alpha,
    /// Beta pre-release
    Beta,
    /// Release candidate
    ReleaseCandidate,
    /// Custom pre-release identifier
    Custom(String),
}

impl FromStr for PreReleaseType {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "alpha" => Ok(PreReleaseType::Alpha),
            "beta" => Ok(PreReleaseType::Beta),
            "rc" => Ok(PreReleaseType::ReleaseCandidate),
            other => {
                if !other.is_empty() && other.chars().all(|c| c.is_alphanumeric() || c == '-') {
                    Ok(PreReleaseType::Custom(other.to_string()))
                } else {
                    Err(ReleaseError::invalid_version(format!(
                        "Invalid pre-release identifier: '{}'",
                        s
                    )))
                }
            }
        }
    }
}

impl fmt::Display for PreReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreReleaseType::Alpha => write!(f, "alpha"),
            PreReleaseType::Beta => write!(f, "beta"),
            PreReleaseType::ReleaseCandidate => write!(f, "rc"),
            PreReleaseType::Custom(s) => write!(f, "{}", s),
        }
    }
}

/// Pre-release component: identifier plus iteration counter
///
/// # Examples
/// - "alpha.0" -> PreRelease { identifier: Alpha, iteration: 0 }
/// - "rc.3" -> PreRelease { identifier: ReleaseCandidate, iteration: 3 }
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PreRelease {
    /// The pre-release identifier (alpha, beta, rc, or custom)
    pub identifier: PreReleaseType,
    /// Iteration counter, incremented per release in the same line
    pub iteration: u32,
}

impl PreRelease {
    /// Create a new pre-release component
    pub fn new(identifier: PreReleaseType, iteration: u32) -> Self {
        PreRelease {
            identifier,
            iteration,
        }
    }

    /// Start a fresh pre-release line for the given identifier (counter 0)
    pub fn start(identifier: PreReleaseType) -> Self {
        PreRelease::new(identifier, 0)
    }

    /// Parse a pre-release component from a string like "beta.1"
    ///
    /// Both parts are required: a bare identifier without a counter is
    /// rejected, as is a counter without an identifier.
    pub fn parse(s: &str) -> Result<Self> {
        let (ident, counter) = s.split_once('.').ok_or_else(|| {
            ReleaseError::invalid_version(format!(
                "Pre-release '{}' is missing an iteration counter",
                s
            ))
        })?;

        let identifier = ident.parse::<PreReleaseType>()?;
        let iteration = counter.parse::<u32>().map_err(|_| {
            ReleaseError::invalid_version(format!("Invalid iteration counter: '{}'", counter))
        })?;

        Ok(PreRelease {
            identifier,
            iteration,
        })
    }

    /// Next iteration in the same pre-release line
    pub fn bump_iteration(&self) -> Self {
        PreRelease {
            identifier: self.identifier.clone(),
            iteration: self.iteration + 1,
        }
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.identifier, self.iteration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prerelease_type_parse_alpha() {
        let pr = "alpha".parse::<PreReleaseType>().unwrap();
        assert_eq!(pr, PreReleaseType::Alpha);
    }

    #[test]
    fn test_prerelease_type_parse_beta() {
        let pr = "beta".parse::<PreReleaseType>().unwrap();
        assert_eq!(pr, PreReleaseType::Beta);
    }

    #[test]
    fn test_prerelease_type_parse_rc() {
        let pr = "rc".parse::<PreReleaseType>().unwrap();
        assert_eq!(pr, PreReleaseType::ReleaseCandidate);
    }

    #[test]
    fn test_prerelease_type_parse_custom() {
        let pr = "next".parse::<PreReleaseType>().unwrap();
        assert_eq!(pr, PreReleaseType::Custom("next".to_string()));
    }

    #[test]
    fn test_prerelease_type_parse_invalid() {
        assert!("invalid!name".parse::<PreReleaseType>().is_err());
        assert!("".parse::<PreReleaseType>().is_err());
    }

    #[test]
    fn test_prerelease_type_ordering() {
        assert!(PreReleaseType::Alpha < PreReleaseType::Beta);
        assert!(PreReleaseType::Beta < PreReleaseType::ReleaseCandidate);
    }

    #[test]
    fn test_prerelease_parse() {
        let pr = PreRelease::parse("beta.1").unwrap();
        assert_eq!(pr.identifier, PreReleaseType::Beta);
        assert_eq!(pr.iteration, 1);
    }

    #[test]
    fn test_prerelease_parse_requires_counter() {
        assert!(PreRelease::parse("alpha").is_err());
    }

    #[test]
    fn test_prerelease_parse_invalid_counter() {
        assert!(PreRelease::parse("beta.abc").is_err());
        assert!(PreRelease::parse("beta.").is_err());
    }

    #[test]
    fn test_prerelease_parse_empty() {
        assert!(PreRelease::parse("").is_err());
    }

    #[test]
    fn test_prerelease_bump_iteration() {
        let pr = PreRelease::parse("rc.3").unwrap();
        let next = pr.bump_iteration();
        assert_eq!(next.identifier, PreReleaseType::ReleaseCandidate);
        assert_eq!(next.iteration, 4);
    }

    #[test]
    fn test_prerelease_start_at_zero() {
        let pr = PreRelease::start(PreReleaseType::Beta);
        assert_eq!(pr.to_string(), "beta.0");
    }

    #[test]
    fn test_prerelease_display() {
        let pr = PreRelease::parse("alpha.2").unwrap();
        assert_eq!(pr.to_string(), "alpha.2");
    }

    #[test]
    fn test_prerelease_ordering_by_iteration() {
        let a = PreRelease::parse("alpha.0").unwrap();
        let b = PreRelease::parse("alpha.1").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_prerelease_ordering_by_identifier() {
        let a = PreRelease::parse("alpha.5").unwrap();
        let b = PreRelease::parse("beta.0").unwrap();
        assert!(a < b);
    }
}
