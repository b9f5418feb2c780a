//! Ceph version numbers and their parsing.

use std::fmt;
use std::str::FromStr;

use regex::{Captures, Regex};

use crate::error::{Component, ParseError};
use crate::release::{self, Release, UNKNOWN_VERSION};


/// Pattern of the version in `ceph --version` output.
/// Digits are ASCII only.
const VERSION_PATTERN: &str = r"ceph version ([0-9]+)\.([0-9]+)\.([0-9]+)";
lazy_static::lazy_static! {
    static ref VERSION_REGEX: Regex = Regex::new(VERSION_PATTERN).unwrap();
}

/// Version of some Ceph build.
///
/// Versions are ordered lexicographically by `major`, `minor` and `patch`
/// (field order matters for the derived [`Ord`]).
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Named release this version belongs to, if any.
    pub fn release(&self) -> Option<Release> {
        Release::from_major(self.major)
    }

    /// Name of the release, or `"<unknown version>"` for uncataloged majors.
    pub fn release_name(&self) -> &'static str {
        self.release().map_or(UNKNOWN_VERSION, Release::name)
    }

    /// Checks if this version is the same as or newer than `other`.
    pub fn is_at_least(&self, other: &Version) -> bool {
        self >= other
    }

    /// Checks if both versions belong to the same release line.
    pub fn is_release(&self, other: &Version) -> bool {
        self.major == other.major
    }

    /// Checks if this version belongs to a production-ready release.
    pub fn is_supported(&self) -> bool {
        release::supported_releases()
            .iter()
            .any(|release| self.is_release(&release.version()))
    }

    pub fn is_luminous(&self) -> bool {
        self.is_release(&release::LUMINOUS)
    }

    pub fn is_mimic(&self) -> bool {
        self.is_release(&release::MIMIC)
    }

    pub fn is_nautilus(&self) -> bool {
        self.is_release(&release::NAUTILUS)
    }

    pub fn is_octopus(&self) -> bool {
        self.is_release(&release::OCTOPUS)
    }

    pub fn is_at_least_mimic(&self) -> bool {
        self.is_at_least(&release::MIMIC)
    }

    pub fn is_at_least_nautilus(&self) -> bool {
        self.is_at_least(&release::NAUTILUS)
    }

    pub fn is_at_least_octopus(&self) -> bool {
        self.is_at_least(&release::OCTOPUS)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}.{}.{} {}",
            self.major,
            self.minor,
            self.patch,
            self.release_name(),
        )
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl From<(u32, u32, u32)> for Version {
    fn from((major, minor, patch): (u32, u32, u32)) -> Self {
        Self::new(major, minor, patch)
    }
}

impl From<Version> for semver::Version {
    fn from(version: Version) -> Self {
        semver::Version::new(
            version.major.into(),
            version.minor.into(),
            version.patch.into(),
        )
    }
}

/// Extracts the version from the output of `ceph --version`.
///
/// The first `ceph version X.Y.Z` found anywhere in `text` is used,
/// everything around it (build hash, release name) is ignored.
///
/// # Errors
/// An error is returned if there is no such substring in `text`
/// or one of its numbers does not fit into [`u32`].
///
pub fn parse(text: &str) -> Result<Version, ParseError> {
    let captures = VERSION_REGEX.captures(text).ok_or_else(|| {
        log::trace!("no version pattern in {:?}", text);
        ParseError::NoMatch {
            input: text.to_string(),
        }
    })?;

    let version = Version::new(
        component(text, &captures, Component::Major)?,
        component(text, &captures, Component::Minor)?,
        component(text, &captures, Component::Patch)?,
    );
    log::debug!("parsed Ceph version {}", version);
    Ok(version)
}

fn component(text: &str, captures: &Captures, component: Component) -> Result<u32, ParseError> {
    let index = match component {
        Component::Major => 1,
        Component::Minor => 2,
        Component::Patch => 3,
    };
    let group = captures.get(index).map_or("", |group| group.as_str());
    group.parse().map_err(|source| {
        let fragment = captures.get(0).map_or("", |fragment| fragment.as_str());
        ParseError::InvalidComponent {
            input: text.to_string(),
            fragment: fragment.to_string(),
            component,
            source,
        }
    })
}
