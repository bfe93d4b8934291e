//! Provides the directed conversions between two systems, [`Primitive`].
//!
//! The formulas are the empirical ones used by the Chinese map providers.
//! They have no exact inverse, each backward conversion is an approximation
//! of its own, hence a round trip does not return the origin bit-for-bit.
//!
//! Notes, most harmonic terms multiply a value in \[deg\] by π directly
//! (not by π/180), and the operation order is significant to reproduce
//! the results of the providers.
use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Coordinate, Correction, System};

/// The longitude offset of BD-09 from GCJ-02 \[deg\].
pub const BD_LNG_OFFSET: f64 = 0.0065;
/// The latitude offset of BD-09 from GCJ-02 \[deg\].
pub const BD_LAT_OFFSET: f64 = 0.006;
/// The radius perturbation of BD-09.
pub const BD_RADIUS_EPS: f64 = 0.00002;
/// The angle perturbation of BD-09.
pub const BD_ANGLE_EPS: f64 = 0.000003;

/// The semi-major axis of the Krasovsky 1940 ellipsoid \[m\].
pub const SEMI_MAJOR_AXIS: f64 = 6378245.0;
/// The squared eccentricity of the Krasovsky 1940 ellipsoid.
#[allow(clippy::excessive_precision)]
pub const ECCENTRICITY_SQUARED: f64 = 0.00669342162296594323;

/// The longitude range (inclusive) where GCJ-02 differs from WGS 84.
pub const COVERAGE_LONGITUDE: (f64, f64) = (72.004, 137.8347);
/// The latitude range (inclusive) where GCJ-02 differs from WGS 84.
pub const COVERAGE_LATITUDE: (f64, f64) = (0.8293, 55.8271);

/// Represents a directed conversion between two adjacent systems.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// let coord = Coordinate::new(116.404, 39.915);
/// let result = Primitive::Bd09ToGcj02.apply(coord);
///
/// assert!((result.longitude - 116.397543).abs() < 1e-6);
/// assert!((result.latitude - 39.908891).abs() < 1e-6);
///
/// assert_eq!(Primitive::Bd09ToGcj02.source(), System::BD09);
/// assert_eq!(Primitive::Bd09ToGcj02.target(), System::GCJ02);
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Primitive {
    /// see [`bd09_to_gcj02`]
    Bd09ToGcj02,
    /// see [`gcj02_to_bd09`]
    Gcj02ToBd09,
    /// see [`gcj02_to_wgs84`]
    Gcj02ToWgs84,
    /// see [`wgs84_to_gcj02`]
    Wgs84ToGcj02,
}

impl Primitive {
    /// Returns the converted coordinate.
    #[inline]
    pub fn apply(&self, coord: Coordinate) -> Coordinate {
        match self {
            Self::Bd09ToGcj02 => bd09_to_gcj02(coord),
            Self::Gcj02ToBd09 => gcj02_to_bd09(coord),
            Self::Gcj02ToWgs84 => gcj02_to_wgs84(coord),
            Self::Wgs84ToGcj02 => wgs84_to_gcj02(coord),
        }
    }

    /// Returns the system of the input.
    #[inline]
    pub const fn source(&self) -> System {
        match self {
            Self::Bd09ToGcj02 => System::BD09,
            Self::Gcj02ToBd09 | Self::Gcj02ToWgs84 => System::GCJ02,
            Self::Wgs84ToGcj02 => System::WGS84,
        }
    }

    /// Returns the system of the output.
    #[inline]
    pub const fn target(&self) -> System {
        match self {
            Self::Bd09ToGcj02 | Self::Wgs84ToGcj02 => System::GCJ02,
            Self::Gcj02ToBd09 => System::BD09,
            Self::Gcj02ToWgs84 => System::WGS84,
        }
    }
}

/// Returns the GCJ-02 coordinate of a BD-09 `coord`.
///
/// This is an approximate inverse of [`gcj02_to_bd09`].
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// let result = bd09_to_gcj02(Coordinate::new(121.4737, 31.2304));
/// assert!((result.longitude - 121.467203).abs() < 1e-6);
/// assert!((result.latitude - 31.224441).abs() < 1e-6);
/// ```
pub fn bd09_to_gcj02(coord: Coordinate) -> Coordinate {
    let x = coord.longitude - BD_LNG_OFFSET;
    let y = coord.latitude - BD_LAT_OFFSET;

    let z = (x * x + y * y).sqrt() - BD_RADIUS_EPS * (y * PI).sin();
    let theta = y.atan2(x) - BD_ANGLE_EPS * (x * PI).cos();

    Coordinate::new(z * theta.cos(), z * theta.sin())
}

/// Returns the BD-09 coordinate of a GCJ-02 `coord`.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// let result = gcj02_to_bd09(Coordinate::new(121.4737, 31.2304));
/// assert!((result.longitude - 121.480195).abs() < 1e-6);
/// assert!((result.latitude - 31.236367).abs() < 1e-6);
/// ```
pub fn gcj02_to_bd09(coord: Coordinate) -> Coordinate {
    let Coordinate {
        longitude: lng,
        latitude: lat,
    } = coord;

    let z = (lng * lng + lat * lat).sqrt() + BD_RADIUS_EPS * (lat * PI).sin();
    let theta = lat.atan2(lng) + BD_ANGLE_EPS * (lng * PI).cos();

    Coordinate::new(
        z * theta.cos() + BD_LNG_OFFSET,
        z * theta.sin() + BD_LAT_OFFSET,
    )
}

/// Returns the WGS 84 coordinate of a GCJ-02 `coord`.
///
/// This subtracts the [`correction`] evaluated at `coord` itself,
/// it is not an exact inverse of [`wgs84_to_gcj02`].
/// Unlike the forward one, this applies outside the coverage too.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// let result = gcj02_to_wgs84(Coordinate::new(121.4737, 31.2304));
/// assert!((result.longitude - 121.469177).abs() < 1e-6);
/// assert!((result.latitude - 31.232342).abs() < 1e-6);
/// ```
pub fn gcj02_to_wgs84(coord: Coordinate) -> Coordinate {
    let corr = correction(&coord);

    // 2x - (x + d) rather than x - d, to keep the rounding of the providers
    Coordinate::new(
        coord.longitude * 2.0 - (coord.longitude + corr.longitude),
        coord.latitude * 2.0 - (coord.latitude + corr.latitude),
    )
}

/// Returns the GCJ-02 coordinate of a WGS 84 `coord`.
///
/// This returns `coord` unchanged when it is out of the coverage,
/// see [`in_coverage`].
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// let result = wgs84_to_gcj02(Coordinate::new(121.4737, 31.2304));
/// assert!((result.longitude - 121.478223).abs() < 1e-6);
/// assert!((result.latitude - 31.228458).abs() < 1e-6);
///
/// // Tokyo, out of the coverage
/// let tokyo = Coordinate::new(139.6917, 35.6895);
/// assert_eq!(wgs84_to_gcj02(tokyo), tokyo);
/// ```
pub fn wgs84_to_gcj02(coord: Coordinate) -> Coordinate {
    if !in_coverage(&coord) {
        return coord;
    }

    coord + correction(&coord)
}

/// Returns `true` if GCJ-02 obfuscates `coord`.
///
/// The coverage is a rectangle (bounds inclusive) roughly containing mainland China,
/// see [`COVERAGE_LONGITUDE`] and [`COVERAGE_LATITUDE`].
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// assert!(in_coverage(&Coordinate::new(116.404, 39.915)));
/// assert!(in_coverage(&Coordinate::new(72.004, 0.8293)));
/// assert!(!in_coverage(&Coordinate::new(139.6917, 35.6895)));
/// assert!(!in_coverage(&Coordinate::new(f64::NAN, 35.0)));
/// ```
#[inline]
pub fn in_coverage(coord: &Coordinate) -> bool {
    let (west, east) = COVERAGE_LONGITUDE;
    let (south, north) = COVERAGE_LATITUDE;

    west <= coord.longitude
        && coord.longitude <= east
        && south <= coord.latitude
        && coord.latitude <= north
}

/// Returns the offset of GCJ-02 from WGS 84 at `coord` \[deg\].
///
/// The raw offsets in \[m\]-like unit are scaled into \[deg\]
/// by the meridian and the parallel radii of curvature of the Krasovsky 1940 ellipsoid.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// let coord = Coordinate::new(121.4737, 31.2304);
/// let corr = correction(&coord);
///
/// assert_eq!(wgs84_to_gcj02(coord), coord + corr);
/// assert!(corr.horizontal() < 0.01);
/// ```
pub fn correction(coord: &Coordinate) -> Correction {
    let x = coord.longitude - 105.0;
    let y = coord.latitude - 35.0;

    let d_lat = raw_latitude(x, y);
    let d_lng = raw_longitude(x, y);

    let rad = coord.latitude / 180.0 * PI;
    let magic = rad.sin();
    let magic = 1.0 - ECCENTRICITY_SQUARED * magic * magic;
    let sqrt_magic = magic.sqrt();

    let d_lat = (d_lat * 180.0)
        / ((SEMI_MAJOR_AXIS * (1.0 - ECCENTRICITY_SQUARED)) / (magic * sqrt_magic) * PI);
    let d_lng = (d_lng * 180.0) / (SEMI_MAJOR_AXIS / sqrt_magic * rad.cos() * PI);

    Correction::new(d_lng, d_lat)
}

#[inline]
fn raw_latitude(x: f64, y: f64) -> f64 {
    let mut ret = -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

#[inline]
fn raw_longitude(x: f64, y: f64) -> f64 {
    let mut ret = x + 300.0 + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (x / 12.0 * PI).sin() + 300.0 * (x / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}
