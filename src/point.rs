//! Provides [`Coordinate`] and [`Correction`].
use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::utils::to_fixed;

/// Represents a position on the Earth, a pair longitude and latitude.
///
/// We emphasize that the order is longitude first, as GPX and web map APIs do,
/// and the unit is \[deg\].
///
/// The system the values belong to is not recorded,
/// it is determined by the caller.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// // Construct
/// let coord = Coordinate::new(116.404, 39.915);
/// assert_eq!(coord.longitude, 116.404);
/// assert_eq!(coord.latitude, 39.915);
///
/// // Add/sub Correction
/// let result = coord + Correction::new(1.0, 1.0);
/// assert_eq!(result, Coordinate::new(117.404, 40.915));
/// let result = result - Correction::new(1.0, 1.0);
/// assert_eq!(result, coord);
/// ```
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    /// The longitude \[deg\] of the coordinate
    pub longitude: f64,
    /// The latitude \[deg\] of the coordinate
    pub latitude: f64,
}

/// The GCJ-02 offset of a position.
///
/// The unit of longitude and latitude is \[deg\].
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// #
/// let correction = Correction::new(1., 2.);
/// assert_eq!(correction.longitude, 1.);
/// assert_eq!(correction.latitude, 2.);
/// ```
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Correction {
    /// The longitude correction \[deg\].
    pub longitude: f64,
    /// The latitude correction \[deg\].
    pub latitude: f64,
}

impl Correction {
    /// Makes a [`Correction`].
    #[inline]
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Returns √𝑙𝑜𝑛𝑔𝑖𝑡𝑢𝑑𝑒² + 𝑙𝑎𝑡𝑖𝑡𝑢𝑑𝑒².
    #[inline]
    pub fn horizontal(&self) -> f64 {
        f64::hypot(self.longitude, self.latitude)
    }
}

impl From<(f64, f64)> for Coordinate {
    /// see [`Coordinate::new()`], longitude first
    #[inline]
    fn from(rhs: (f64, f64)) -> Self {
        Self::new(rhs.0, rhs.1)
    }
}

impl From<Coordinate> for (f64, f64) {
    #[inline]
    fn from(rhs: Coordinate) -> Self {
        (rhs.longitude, rhs.latitude)
    }
}

macro_rules! impl_op {
    ($trait:ident, $method:ident, $op:tt, $lhs:ty, $rhs:ty) => {
        impl $trait<$rhs> for $lhs {
            type Output = Coordinate;

            #[inline]
            fn $method(self, rhs: $rhs) -> Self::Output {
                Coordinate::new(self.longitude $op rhs.longitude, self.latitude $op rhs.latitude)
            }
        }
    };
}

macro_rules! impl_op_assign {
    ($trait:ident, $method:ident, $op:tt, $rhs:ty) => {
        impl $trait<$rhs> for Coordinate {
            #[inline]
            fn $method(&mut self, rhs: $rhs) {
                self.longitude $op rhs.longitude;
                self.latitude $op rhs.latitude;
            }
        }
    };
}

impl_op!(Add, add, +, Coordinate, Correction);
impl_op!(Add, add, +, Coordinate, &Correction);
impl_op!(Add, add, +, &Coordinate, Correction);
impl_op!(Add, add, +, &Coordinate, &Correction);
impl_op!(Sub, sub, -, Coordinate, Correction);
impl_op!(Sub, sub, -, Coordinate, &Correction);
impl_op!(Sub, sub, -, &Coordinate, Correction);
impl_op!(Sub, sub, -, &Coordinate, &Correction);

impl_op_assign!(AddAssign, add_assign, +=, Correction);
impl_op_assign!(AddAssign, add_assign, +=, &Correction);
impl_op_assign!(SubAssign, sub_assign, -=, Correction);
impl_op_assign!(SubAssign, sub_assign, -=, &Correction);

impl Display for Coordinate {
    /// Writes `longitude,latitude` with 6 digits after the decimal point.
    ///
    /// # Example
    ///
    /// ```
    /// # use gcjtrans::*;
    /// let coord = Coordinate::new(116.3975253, 39.9085);
    /// assert_eq!(coord.to_string(), "116.397525,39.908500");
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", to_fixed(self.longitude), to_fixed(self.latitude))
    }
}

impl Coordinate {
    /// Makes a [`Coordinate`].
    ///
    /// This does not check the value range.
    ///
    /// # Example
    ///
    /// ```
    /// # use gcjtrans::*;
    /// let coord = Coordinate::new(116.404, 39.915);
    /// assert_eq!(coord.longitude, 116.404);
    /// assert_eq!(coord.latitude, 39.915);
    /// ```
    #[inline]
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Returns `true` if both components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.longitude.is_finite() && self.latitude.is_finite()
    }
}
