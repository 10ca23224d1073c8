// Copyright 2025 The rocketchat-api Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Server release versions.
//!
//! Endpoints were added to the server over time, so every request carries
//! the oldest release that understands it. The transport compares that
//! against the version the connected server reports.

use std::{fmt, num::ParseIntError, str::FromStr};

use thiserror::Error;

/// A server release version, as a `major.minor.patch` triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApiVersion {
    major: u64,
    minor: u64,
    patch: u64,
}

impl ApiVersion {
    /// Create a version from its components.
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self { major, minor, patch }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for ApiVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut components = s.split('.');

        let mut next = || components.next().ok_or(VersionParseError::Format);
        let (major, minor, patch) = (next()?, next()?, next()?);

        if components.next().is_some() {
            return Err(VersionParseError::Format);
        }

        Ok(Self::new(major.parse()?, minor.parse()?, patch.parse()?))
    }
}

/// An error while parsing an [`ApiVersion`] from a string.
#[derive(Debug, Error)]
pub enum VersionParseError {
    /// The string is not of the `major.minor.patch` form.
    #[error("expected a major.minor.patch version string")]
    Format,

    /// A version component is not a valid number.
    #[error("invalid version component: {0}")]
    Component(#[from] ParseIntError),
}

#[cfg(test)]
mod tests {
    use assert_matches2::assert_let;

    use super::{ApiVersion, VersionParseError};

    #[test]
    fn parse_and_display() {
        let version: ApiVersion = "0.60.0".parse().unwrap();
        assert_eq!(version, ApiVersion::new(0, 60, 0));
        assert_eq!(version.to_string(), "0.60.0");

        assert_eq!("3.12.1".parse::<ApiVersion>().unwrap(), ApiVersion::new(3, 12, 1));
    }

    #[test]
    fn ordering() {
        assert!(ApiVersion::new(1, 0, 0) > ApiVersion::new(0, 74, 3));
        assert!(ApiVersion::new(0, 61, 0) > ApiVersion::new(0, 60, 9));
        assert!(ApiVersion::new(0, 60, 1) > ApiVersion::new(0, 60, 0));
        assert_eq!(ApiVersion::new(0, 60, 0), ApiVersion::new(0, 60, 0));
    }

    #[test]
    fn parse_rejects_wrong_shape() {
        assert_let!(Err(VersionParseError::Format) = "0.60".parse::<ApiVersion>());
        assert_let!(Err(VersionParseError::Format) = "0.60.0.1".parse::<ApiVersion>());
        assert_let!(Err(VersionParseError::Component(_)) = "0.x.0".parse::<ApiVersion>());
        assert_let!(Err(VersionParseError::Component(_)) = "..".parse::<ApiVersion>());
    }
}
