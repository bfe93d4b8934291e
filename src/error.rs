//! Provides [`Error`] etc.
use std::fmt::{Display, Formatter};

use crate::gpx::GpxError;

/// Alias for a `Result<T, gcjtrans::error::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents all possible errors that can occur by converting.
///
/// This error is used as the error type for the [`convert`](crate::convert),
/// [`Converter::from_tags`](crate::Converter::from_tags) etc.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error {
    kind: ErrorKind,
}

/// An error kind used by [`Error`].
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The system tag is not one of `bd09`, `gcj02` and `wgs84`.
    #[error("invalid {side} system '{tag}': expected one of bd09, gcj02, wgs84")]
    InvalidSystem {
        /// Which side of the conversion the tag is for
        side: Side,
        /// The rejected tag
        tag: String,
    },
    /// Reading or writing the track-point file fails.
    #[error(transparent)]
    Gpx(#[from] GpxError),
}

/// The side of a conversion, used by [`ErrorKind::InvalidSystem`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Side {
    Source,
    Target,
}

impl Error {
    #[cold]
    pub(crate) fn new_invalid_system(side: Side, err: ParseSystemError) -> Self {
        Self {
            kind: ErrorKind::InvalidSystem { side, tag: err.tag },
        }
    }

    /// Returns the detailed cause.
    pub const fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl From<GpxError> for Error {
    #[cold]
    fn from(value: GpxError) -> Self {
        Self {
            kind: ErrorKind::Gpx(value),
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// An error which can be returned on parsing a [`System`](crate::System).
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
#[error("unknown coordinate system '{tag}': expected one of bd09, gcj02, wgs84")]
pub struct ParseSystemError {
    tag: String,
}

impl ParseSystemError {
    #[cold]
    pub(crate) fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
        }
    }

    /// Returns the rejected text.
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::new_invalid_system(Side::Target, ParseSystemError::new("utm"));
        assert_eq!(
            err.to_string(),
            "invalid target system 'utm': expected one of bd09, gcj02, wgs84"
        );
        assert!(matches!(
            err.kind(),
            ErrorKind::InvalidSystem { side: Side::Target, tag } if tag == "utm"
        ));

        let err = ParseSystemError::new("epsg:4326");
        assert_eq!(
            err.to_string(),
            "unknown coordinate system 'epsg:4326': expected one of bd09, gcj02, wgs84"
        );
    }
}
