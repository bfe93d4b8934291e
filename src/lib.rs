//! # gcjtrans
//!
//! Coordinate converter between the coordinate systems used by Chinese map services,
//! BD-09 (Baidu), GCJ-02 (the obfuscated system of the State Bureau of Surveying and Mapping)
//! and WGS 84 (GPS), for GPX track files.
//!
//! 百度坐标系（BD-09）、火星坐标系（GCJ-02）与 WGS84 坐标系之间的坐标转换。
//!
//! ```
//! use gcjtrans::{Converter, Coordinate, System};
//!
//! fn main() -> gcjtrans::Result<()> {
//!     // Resolve the conversion chain once
//!     let converter = Converter::from_tags("bd09", "wgs84")?;
//!     assert_eq!(converter.source(), System::BD09);
//!
//!     // Tian'anmen on Baidu Maps
//!     let origin = Coordinate::new(116.404, 39.915);
//!
//!     // Converts via GCJ-02
//!     let result = converter.convert(&origin);
//!     // Prints Coordinate { longitude: 116.39129962055067, latitude: 39.90748780079812 }
//!     println!("{result:?}");
//!     // Prints 116.391300,39.907488
//!     println!("{result}");
//!
//!     Ok(())
//! }
//! ```
//!
//! Features:
//!
//! - Supports all six directions between BD-09, GCJ-02 and WGS 84,
//!   BD-09 and WGS 84 are connected through GCJ-02
//! - Reproduces the formulas widely used by the map providers
//!   including the order of operations
//! - Converts GPX files (`trkpt`, `rtept` and `wpt`),
//!   keeping everything but the coordinates as it is
//! - Offline, no web API
//!
//! We note that the conversions are approximations,
//! GCJ-02 to WGS 84 and BD-09 to GCJ-02 are not exact inverses
//! of the opposite directions.
//! A round trip through BD-09 shifts a position by a few centimeters at most,
//! one through GCJ-02 by up to 6e-5 degrees, about 7 meters.
//!
//! # GPX
//!
//! ```no_run
//! # fn main() -> gcjtrans::Result<()> {
//! let count = gcjtrans::gpx::convert_file("ride.gpx", "ride_wgs84.gpx", "bd09", "wgs84")?;
//! println!("converted {count} points");
//! # Ok(())}
//! ```
//!
//! # Features
//!
//! - `serde`: (de)serialization of [`Coordinate`], [`Correction`], [`System`] and [`Primitive`]
//! - `rayon`: [`Converter::par_convert_all`]
//! - `cli`: the `gcjtrans` binary

#[doc(inline)]
pub use chain::Chain;
#[doc(inline)]
pub use converter::{convert, transform_point, Converter, TrackPoint};
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use point::{Coordinate, Correction};
#[doc(inline)]
pub use primitive::{
    bd09_to_gcj02, correction, gcj02_to_bd09, gcj02_to_wgs84, in_coverage, wgs84_to_gcj02,
    Primitive,
};
#[doc(inline)]
pub use system::System;

pub mod chain;
pub mod converter;
pub mod error;
pub mod gpx;
pub mod point;
pub mod primitive;
pub mod system;
pub mod utils;
