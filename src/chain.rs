//! Provides [`Chain`], the registry of conversions between any two systems.
use crate::primitive::Primitive;
use crate::{Coordinate, System};

const IDENTITY: &[Primitive] = &[];
const BD09_TO_GCJ02: &[Primitive] = &[Primitive::Bd09ToGcj02];
const GCJ02_TO_BD09: &[Primitive] = &[Primitive::Gcj02ToBd09];
const GCJ02_TO_WGS84: &[Primitive] = &[Primitive::Gcj02ToWgs84];
const WGS84_TO_GCJ02: &[Primitive] = &[Primitive::Wgs84ToGcj02];
const BD09_TO_WGS84: &[Primitive] = &[Primitive::Bd09ToGcj02, Primitive::Gcj02ToWgs84];
const WGS84_TO_BD09: &[Primitive] = &[Primitive::Wgs84ToGcj02, Primitive::Gcj02ToBd09];

/// An ordered sequence of [`Primitive`]s converting `source` into `target`.
///
/// There is exactly one chain for each pair of [`System`]s;
/// BD-09 and WGS 84 are connected through GCJ-02,
/// and the chain between the same system is empty.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// let chain = Chain::resolve(System::BD09, System::WGS84);
/// assert_eq!(
///     chain.primitives(),
///     &[Primitive::Bd09ToGcj02, Primitive::Gcj02ToWgs84]
/// );
///
/// let chain = Chain::resolve(System::GCJ02, System::GCJ02);
/// assert!(chain.is_identity());
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Chain {
    source: System,
    target: System,
    primitives: &'static [Primitive],
}

impl Chain {
    /// Returns the chain from `source` to `target`.
    ///
    /// The table is static, this never allocates.
    pub const fn resolve(source: System, target: System) -> Self {
        let primitives = match (source, target) {
            (System::BD09, System::BD09)
            | (System::GCJ02, System::GCJ02)
            | (System::WGS84, System::WGS84) => IDENTITY,
            (System::BD09, System::GCJ02) => BD09_TO_GCJ02,
            (System::GCJ02, System::BD09) => GCJ02_TO_BD09,
            (System::GCJ02, System::WGS84) => GCJ02_TO_WGS84,
            (System::WGS84, System::GCJ02) => WGS84_TO_GCJ02,
            (System::BD09, System::WGS84) => BD09_TO_WGS84,
            (System::WGS84, System::BD09) => WGS84_TO_BD09,
        };

        Self {
            source,
            target,
            primitives,
        }
    }

    /// Returns the system of the input.
    #[inline]
    pub const fn source(&self) -> System {
        self.source
    }

    /// Returns the system of the output.
    #[inline]
    pub const fn target(&self) -> System {
        self.target
    }

    /// Returns the primitives in order of application.
    #[inline]
    pub const fn primitives(&self) -> &'static [Primitive] {
        self.primitives
    }

    /// Returns the count of primitives.
    #[inline]
    pub const fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Returns `true` if the chain has no primitive.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Returns `true` if the chain returns the input as it is,
    /// equivalently, [`Chain::is_empty`].
    #[inline]
    pub const fn is_identity(&self) -> bool {
        self.is_empty()
    }

    /// Returns the converted coordinate.
    ///
    /// see [`transform_point`](crate::converter::transform_point).
    #[inline]
    pub fn apply(&self, coord: Coordinate) -> Coordinate {
        self.primitives
            .iter()
            .fold(coord, |acc, primitive| primitive.apply(acc))
    }
}
