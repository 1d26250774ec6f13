use crate::domain::prerelease::PreRelease;
use crate::domain::release_type::ReleaseType;
use crate::error::{ReleaseError, Result};
use std::cmp::Ordering;
use std::fmt;

/// Semantic version with an optional pre-release component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub prerelease: Option<PreRelease>,
}

impl Version {
    /// Create a new stable version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease: None,
        }
    }

    /// Parse a version from a tag or manifest string (e.g., "v1.2.3" or "2.0.0-alpha.1")
    pub fn parse(s: &str) -> Result<Self> {
        // Remove 'v' or 'V' prefix
        let clean = s.trim_start_matches('v').trim_start_matches('V');

        let (core, pre) = match clean.split_once('-') {
            Some((core, pre)) => (core, Some(pre)),
            None => (clean, None),
        };

        let parts: Vec<&str> = core.split('.').collect();
        if parts.len() != 3 {
            return Err(ReleaseError::invalid_version(format!(
                "'{}' - expected X.Y.Z with optional pre-release",
                s
            )));
        }

        let major = parts[0]
            .parse::<u32>()
            .map_err(|_| ReleaseError::invalid_version(format!("Invalid major: {}", parts[0])))?;
        let minor = parts[1]
            .parse::<u32>()
            .map_err(|_| ReleaseError::invalid_version(format!("Invalid minor: {}", parts[1])))?;
        let patch = parts[2]
            .parse::<u32>()
            .map_err(|_| ReleaseError::invalid_version(format!("Invalid patch: {}", parts[2])))?;

        let prerelease = pre.map(PreRelease::parse).transpose()?;

        Ok(Version {
            major,
            minor,
            patch,
            prerelease,
        })
    }

    /// Whether this is a stable version (no pre-release component)
    pub fn is_stable(&self) -> bool {
        self.prerelease.is_none()
    }

    /// Bump the component named by the release type, zeroing lower components.
    ///
    /// The result is stable; any pre-release component is dropped.
    pub fn bump(&self, release_type: ReleaseType) -> Self {
        match release_type {
            ReleaseType::Major => Version::new(self.major + 1, 0, 0),
            ReleaseType::Minor => Version::new(self.major, self.minor + 1, 0),
            ReleaseType::Patch => Version::new(self.major, self.minor, self.patch + 1),
        }
    }

    /// Same version numbers with the given pre-release component attached
    pub fn with_prerelease(&self, prerelease: PreRelease) -> Self {
        Version {
            major: self.major,
            minor: self.minor,
            patch: self.patch,
            prerelease: Some(prerelease),
        }
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (&self.prerelease, &other.prerelease) {
                // A stable version ranks above any pre-release of the same triple
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(b),
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.prerelease {
            write!(f, "-{}", pre)?;
        }
        Ok(())
    }
}
