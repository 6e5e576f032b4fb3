//! Dotted `major.minor.patch` versions used by `file_format_version`.

use crate::error::{LayerConfError, Result};
use std::fmt;
use std::str::FromStr;

/// A configuration file format version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Format version written by `Configuration::save`.
    pub const CURRENT: Version = Version::new(2, 2, 0);

    /// Version assumed for documents without a `file_format_version` member.
    pub const UNVERSIONED: Version = Version::new(2, 0, 1);

    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl FromStr for Version {
    type Err = LayerConfError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || LayerConfError::format(format!("invalid version '{}'", s));

        let mut parts = s.trim().split('.');
        let mut next = || -> Result<u32> {
            parts
                .next()
                .ok_or_else(invalid)?
                .parse::<u32>()
                .map_err(|_| invalid())
        };

        let version = Version::new(next()?, next()?, next()?);
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(version)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
