//! Provides [`System`], the coordinate reference systems.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseSystemError;

/// Represents a coordinate reference system.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
/// assert_eq!("bd09".parse::<System>()?, System::BD09);
/// assert_eq!("GCJ02".parse::<System>()?, System::GCJ02);
/// assert_eq!(" Wgs84 ".parse::<System>()?, System::WGS84);
/// assert!("epsg4326".parse::<System>().is_err());
///
/// assert_eq!(System::GCJ02.to_string(), "gcj02");
/// # Ok(())}
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum System {
    /// The Baidu system, GCJ-02 with an additional offset.
    BD09,
    /// The obfuscated system of the State Bureau of Surveying and Mapping.
    GCJ02,
    /// The global system, used by GPS.
    WGS84,
}

impl System {
    /// All systems.
    pub const ALL: [System; 3] = [System::BD09, System::GCJ02, System::WGS84];

    /// Returns the canonical name, `"bd09"`, `"gcj02"` or `"wgs84"`.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BD09 => "bd09",
            Self::GCJ02 => "gcj02",
            Self::WGS84 => "wgs84",
        }
    }
}

impl Display for System {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for System {
    type Err = ParseSystemError;

    /// Makes a [`System`] from its name, case-insensitively.
    ///
    /// Leading and trailing whitespace of `s` is ignored,
    /// the error still carries `s` as it is.
    ///
    /// # Errors
    ///
    /// If `s` is not one of `bd09`, `gcj02` and `wgs84`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|system| system.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseSystemError::new(s))
    }
}

impl TryFrom<&str> for System {
    type Error = ParseSystemError;

    /// see [`System::from_str()`]
    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
