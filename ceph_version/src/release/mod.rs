//! Catalog of known Ceph releases.
//!
//! A release is a major version line, so every lookup here goes
//! through the `major` number only.

use std::fmt;

use crate::version::Version;

mod tests;

/// Reference version of the Luminous release.
pub const LUMINOUS: Version = Version::new(12, 0, 0);
/// Reference version of the Mimic release.
pub const MIMIC: Version = Version::new(13, 0, 0);
/// Reference version of the Nautilus release.
pub const NAUTILUS: Version = Version::new(14, 0, 0);
/// Reference version of the Octopus release.
pub const OCTOPUS: Version = Version::new(15, 0, 0);

/// Name reported for versions which belong to no known release.
pub const UNKNOWN_VERSION: &str = "<unknown version>";

const NAMED: &[Release] = &[
    Release::Octopus,
    Release::Nautilus,
    Release::Mimic,
    Release::Luminous,
];

/// Production-ready releases.
const SUPPORTED: &[Release] = &[Release::Luminous, Release::Mimic];

/// Releases which are known but not ready for production.
const UNSUPPORTED: &[Release] = &[Release::Nautilus];

/// Supported releases followed by unsupported ones.
const ALL: &[Release] = &[Release::Luminous, Release::Mimic, Release::Nautilus];

/// Named major version line of Ceph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Release {
    Luminous,
    Mimic,
    Nautilus,
    Octopus,
}

impl Release {
    /// Every named release, newest first.
    pub fn all() -> &'static [Release] {
        NAMED
    }

    /// Finds the named release of the given major version line.
    pub fn from_major(major: u32) -> Option<Release> {
        Self::all()
            .iter()
            .copied()
            .find(|release| release.version().major == major)
    }

    /// Reference version of this release, i.e. its `x.0.0`.
    pub const fn version(self) -> Version {
        match self {
            Release::Luminous => LUMINOUS,
            Release::Mimic => MIMIC,
            Release::Nautilus => NAUTILUS,
            Release::Octopus => OCTOPUS,
        }
    }

    /// Lowercase release name as used by Ceph itself.
    pub const fn name(self) -> &'static str {
        match self {
            Release::Luminous => "luminous",
            Release::Mimic => "mimic",
            Release::Nautilus => "nautilus",
            Release::Octopus => "octopus",
        }
    }

    pub fn is_supported(self) -> bool {
        SUPPORTED.contains(&self)
    }
}

impl fmt::Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Releases which are ready for production.
pub fn supported_releases() -> &'static [Release] {
    SUPPORTED
}

/// Releases which are known but not ready for production.
pub fn unsupported_releases() -> &'static [Release] {
    UNSUPPORTED
}

/// Supported releases followed by unsupported ones.
pub fn all_releases() -> &'static [Release] {
    ALL
}
