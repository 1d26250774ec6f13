//! Domain types shared by the release engine

pub mod prerelease;
pub mod release_type;
pub mod version;

pub use prerelease::{PreRelease, PreReleaseType};
pub use release_type::ReleaseType;
pub use version::Version;
