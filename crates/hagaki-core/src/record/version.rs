//! vCard format versions.

use std::fmt;

use serde::Deserialize;

use crate::error::RecordError;

/// Declared format version of a contact record.
///
/// The version selects between two incompatible serialization shapes:
/// vCard 4.0 (RFC 6350) and the 3.0-and-below shape (RFC 2426). It is an
/// explicit sum type so every version comparison is exact; there is no
/// coercive numeric comparison and no per-process version state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "u8")]
pub enum VcfVersion {
    /// vCard 3.0 and below (RFC 2426).
    ///
    /// The default: a record that never declared a version encodes with
    /// the pre-4.0 rules.
    #[default]
    V3,
    /// vCard 4.0 (RFC 6350).
    V4,
}

impl VcfVersion {
    /// Returns the major version number (3 or 4).
    #[must_use]
    pub const fn major(self) -> u8 {
        match self {
            Self::V3 => 3,
            Self::V4 => 4,
        }
    }
}

impl fmt::Display for VcfVersion {
    /// Canonical wire form used on the `VERSION:` line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V3 => write!(f, "3.0"),
            Self::V4 => write!(f, "4.0"),
        }
    }
}

impl TryFrom<u8> for VcfVersion {
    type Error = RecordError;

    fn try_from(major: u8) -> Result<Self, Self::Error> {
        match major {
            3 => Ok(Self::V3),
            4 => Ok(Self::V4),
            other => Err(RecordError::UnsupportedVersion(other)),
        }
    }
}
