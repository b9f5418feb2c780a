//! Identification and comparison of Ceph releases.
//!
//! Turns the output of `ceph --version` into a [`Version`] and answers
//! which [`Release`] it belongs to, whether that release is supported
//! and whether it is at least as new as some other version.

pub use error::ParseError;
pub use release::Release;
pub use version::{parse, Version};

pub mod error;
pub mod release;
pub mod version;
