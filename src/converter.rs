//! Provides [`Converter`], [`convert`] etc.
use log::debug;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::chain::Chain;
use crate::error::{Error, Result, Side};
use crate::{Coordinate, System};

/// A record holding a coordinate, e.g. a point of a track.
///
/// The conversion reads and writes the coordinate only,
/// other attributes of the record are left untouched.
pub trait TrackPoint {
    /// Returns the coordinate of the record.
    fn coordinate(&self) -> Coordinate;

    /// Replaces the coordinate of the record.
    fn set_coordinate(&mut self, coord: Coordinate);
}

impl TrackPoint for Coordinate {
    #[inline]
    fn coordinate(&self) -> Coordinate {
        *self
    }

    #[inline]
    fn set_coordinate(&mut self, coord: Coordinate) {
        *self = coord;
    }
}

/// Returns `coord` threaded through each primitive of `chain` in order.
///
/// This returns `coord` as it is if `chain` is empty.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// let coord = Coordinate::new(116.404, 39.915);
///
/// let chain = Chain::resolve(System::BD09, System::WGS84);
/// let result = transform_point(coord, &chain);
/// assert_eq!(result, gcj02_to_wgs84(bd09_to_gcj02(coord)));
///
/// let chain = Chain::resolve(System::WGS84, System::WGS84);
/// assert_eq!(transform_point(coord, &chain), coord);
/// ```
#[inline]
pub fn transform_point(coord: Coordinate, chain: &Chain) -> Coordinate {
    chain.apply(coord)
}

/// The coordinate converter from `source` system to `target` system.
///
/// The conversion chain is resolved once on construction.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// # fn main() -> gcjtrans::Result<()> {
/// let converter = Converter::from_tags("bd09", "WGS84")?;
/// assert_eq!(converter.source(), System::BD09);
/// assert_eq!(converter.target(), System::WGS84);
///
/// let result = converter.convert(&Coordinate::new(116.404, 39.915));
/// assert_eq!(result.to_string(), "116.391300,39.907488");
///
/// // Unknown tag
/// assert!(Converter::from_tags("bd09", "utm").is_err());
/// # Ok(())}
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Converter {
    chain: Chain,
}

impl Converter {
    /// Makes a [`Converter`].
    pub fn new(source: System, target: System) -> Self {
        let chain = Chain::resolve(source, target);
        debug!(
            "resolved {} -> {} with {} primitive(s): {:?}",
            source,
            target,
            chain.len(),
            chain.primitives()
        );
        Self { chain }
    }

    /// Makes a [`Converter`] from system names.
    ///
    /// Names are case-insensitive, see [`System::from_str`](std::str::FromStr).
    ///
    /// # Errors
    ///
    /// If `source` and/or `target` is not one of `bd09`, `gcj02` and `wgs84`.
    pub fn from_tags(source: &str, target: &str) -> Result<Self> {
        let source = source
            .parse()
            .map_err(|err| Error::new_invalid_system(Side::Source, err))?;
        let target = target
            .parse()
            .map_err(|err| Error::new_invalid_system(Side::Target, err))?;
        Ok(Self::new(source, target))
    }

    /// Returns the system of the input.
    #[inline]
    pub const fn source(&self) -> System {
        self.chain.source()
    }

    /// Returns the system of the output.
    #[inline]
    pub const fn target(&self) -> System {
        self.chain.target()
    }

    /// Returns the resolved chain.
    #[inline]
    pub const fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Returns the converted coordinate.
    #[inline]
    pub fn convert(&self, coord: &Coordinate) -> Coordinate {
        transform_point(*coord, &self.chain)
    }

    /// Converts the coordinate of each record in place.
    ///
    /// The order and the other attributes of `points` are preserved.
    ///
    /// # Example
    ///
    /// ```
    /// # use gcjtrans::*;
    /// let mut points = [
    ///     Coordinate::new(116.404, 39.915),
    ///     Coordinate::new(121.4737, 31.2304),
    /// ];
    ///
    /// let converter = Converter::new(System::BD09, System::GCJ02);
    /// converter.convert_all(&mut points);
    ///
    /// assert_eq!(points[0], bd09_to_gcj02(Coordinate::new(116.404, 39.915)));
    /// assert_eq!(points[1], bd09_to_gcj02(Coordinate::new(121.4737, 31.2304)));
    /// ```
    pub fn convert_all<P>(&self, points: &mut [P])
    where
        P: TrackPoint,
    {
        if self.chain.is_identity() {
            return;
        }

        for point in points.iter_mut() {
            let coord = self.convert(&point.coordinate());
            point.set_coordinate(coord);
        }
    }

    /// Converts the coordinate of each record in place, in parallel.
    ///
    /// This is equivalent to [`Converter::convert_all`].
    #[cfg(feature = "rayon")]
    pub fn par_convert_all<P>(&self, points: &mut [P])
    where
        P: TrackPoint + Send,
    {
        if self.chain.is_identity() {
            return;
        }

        points.par_iter_mut().for_each(|point| {
            let coord = self.convert(&point.coordinate());
            point.set_coordinate(coord);
        });
    }
}

/// Converts the coordinate of each record in place,
/// from `source` system to `target` system given by names.
///
/// Nothing is modified on error.
///
/// # Errors
///
/// If `source` and/or `target` is not one of `bd09`, `gcj02` and `wgs84`
/// (case-insensitive).
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// # fn main() -> gcjtrans::Result<()> {
/// let mut points = vec![Coordinate::new(116.404, 39.915)];
///
/// convert(&mut points, "bd09", "wgs84")?;
/// assert_eq!(points[0].to_string(), "116.391300,39.907488");
///
/// // Unknown tag
/// let before = points.clone();
/// assert!(convert(&mut points, "bd09", "mercator").is_err());
/// assert_eq!(points, before);
/// # Ok(())}
/// ```
pub fn convert<P>(points: &mut [P], source: &str, target: &str) -> Result<()>
where
    P: TrackPoint,
{
    let converter = Converter::from_tags(source, target)?;
    converter.convert_all(points);
    Ok(())
}
