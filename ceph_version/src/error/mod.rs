//! Errors of version parsing.

use std::fmt;
use std::num::ParseIntError;

use thiserror::Error;

/// Numeric part of a version which failed to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Component::Major => "major",
            Component::Minor => "minor",
            Component::Patch => "patch",
        };
        write!(f, "{}", name)
    }
}

/// Error that can happen when extracting a version from `ceph --version` output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("failed to parse version from: {input}")]
    NoMatch { input: String },

    #[error("failed to parse version {component} part: {fragment}")]
    InvalidComponent {
        input: String,
        fragment: String,
        component: Component,
        #[source]
        source: ParseIntError,
    },
}

impl ParseError {
    /// Text which was given to the parser.
    pub fn input(&self) -> &str {
        match self {
            ParseError::NoMatch { input } => input,
            ParseError::InvalidComponent { input, .. } => input,
        }
    }
}
