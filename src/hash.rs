//! The [`Hash`] value type: an interleaved cell index paired with its precision.

use std::fmt;

use geo::Point;
use serde::{Deserialize, Serialize};

use crate::area::Area;
use crate::bits::{deinterleave, interleave};
use crate::error::{GeohashError, Result};

// Web Mercator latitude cutoff, full longitude range.
pub const LAT_MIN: f64 = -85.05112878;
pub const LAT_MAX: f64 = 85.05112878;
pub const LON_MIN: f64 = -180.0;
pub const LON_MAX: f64 = 180.0;

pub const PRECISION_MIN: u8 = 1;
pub const PRECISION_MAX: u8 = 26;

pub(crate) const LAT_SCALE: f64 = LAT_MAX - LAT_MIN;
pub(crate) const LON_SCALE: f64 = LON_MAX - LON_MIN;

/// Checks that `precision` lies within `[PRECISION_MIN, PRECISION_MAX]`.
pub(crate) fn validate_precision(precision: u8) -> Result<()> {
    if (PRECISION_MIN..=PRECISION_MAX).contains(&precision) {
        Ok(())
    } else {
        Err(GeohashError::InvalidPrecision(precision))
    }
}

/// A numeric geohash.
///
/// `value` holds the Morton-interleaved grid coordinates of the cell: the
/// latitude index on the even bits and the longitude index on the odd bits.
/// Only the low `2 * precision` bits are significant.
///
/// # Examples
///
/// ```
/// use morton_geohash::Hash;
///
/// let hash = Hash::encode_with_precision(51.52463, -0.08411, 20)?;
/// assert_eq!(hash.value(), 528212444555);
/// assert_eq!(hash.precision(), 20);
///
/// let area = hash.decode();
/// assert!(area.contains(51.52463, -0.08411));
/// # Ok::<(), morton_geohash::GeohashError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawHash")]
pub struct Hash {
    value: u64,
    precision: u8,
}

#[derive(Deserialize)]
struct RawHash {
    value: u64,
    precision: u8,
}

impl TryFrom<RawHash> for Hash {
    type Error = GeohashError;

    fn try_from(raw: RawHash) -> Result<Self> {
        Hash::with_precision(raw.value, raw.precision)
    }
}

impl Hash {
    /// Wraps a raw value at maximum precision.
    ///
    /// Fails when `value` is wider than `2 * PRECISION_MAX` bits.
    pub fn new(value: u64) -> Result<Self> {
        Self::with_precision(value, PRECISION_MAX)
    }

    /// Wraps a raw value at the given precision.
    ///
    /// Fails with [`GeohashError::InvalidPrecision`] when the precision is out
    /// of range or `value` does not fit within `2 * precision` bits.
    pub fn with_precision(value: u64, precision: u8) -> Result<Self> {
        validate_precision(precision)?;
        if value >> (2 * precision as u32) != 0 {
            return Err(GeohashError::InvalidPrecision(precision));
        }
        Ok(Self { value, precision })
    }

    /// Constructor for values already known to satisfy the invariants.
    pub(crate) const fn from_parts(value: u64, precision: u8) -> Self {
        Self { value, precision }
    }

    /// Encodes a coordinate at maximum precision.
    pub fn encode(lat: f64, lon: f64) -> Self {
        let (x, y) = grid_coords(lat, lon, PRECISION_MAX);
        Self::from_parts(interleave(x, y), PRECISION_MAX)
    }

    /// Encodes a coordinate into a cell of `2^precision` divisions per axis.
    ///
    /// Grid coordinates are truncated toward zero. A point that lands within
    /// rounding distance of a grid line is assigned to the cell whose decoded
    /// bounds contain it. Points outside `[LAT_MIN, LAT_MAX]` x
    /// `[LON_MIN, LON_MAX]` are clamped onto the border cells.
    pub fn encode_with_precision(lat: f64, lon: f64, precision: u8) -> Result<Self> {
        validate_precision(precision)?;
        let (x, y) = grid_coords(lat, lon, precision);
        Ok(Self::from_parts(interleave(x, y), precision))
    }

    /// Encodes a `geo::Point` (x = longitude, y = latitude).
    pub fn encode_point(point: &Point, precision: u8) -> Result<Self> {
        Self::encode_with_precision(point.y(), point.x(), precision)
    }

    /// The interleaved cell bits.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Number of bits per axis.
    pub fn precision(&self) -> u8 {
        self.precision
    }

    /// Decodes the hash into the bounding box of its cell.
    pub fn decode(&self) -> Area {
        let (x, y) = deinterleave(self.value);
        let cells = grid_size(self.precision);

        Area::from_bounds(
            grid_line(x, cells, LAT_MIN, LAT_SCALE),
            grid_line(x + 1, cells, LAT_MIN, LAT_SCALE),
            grid_line(y, cells, LON_MIN, LON_SCALE),
            grid_line(y + 1, cells, LON_MIN, LON_SCALE),
        )
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.value, self.precision)
    }
}

#[inline]
fn grid_size(precision: u8) -> f64 {
    (1u64 << precision) as f64
}

/// Coordinate of the `index`-th grid line on an axis starting at `min`.
#[inline]
fn grid_line(index: u64, cells: f64, min: f64, scale: f64) -> f64 {
    min + index as f64 / cells * scale
}

/// Index of the cell containing `v` on one axis.
fn axis_index(v: f64, min: f64, scale: f64, precision: u8) -> u64 {
    let cells = grid_size(precision);
    let last = (1u64 << precision) - 1;

    // Float-to-int casts truncate toward zero and saturate negatives and NaN to 0.
    let mut index = (((v - min) / scale * cells) as u64).min(last);

    // Truncation can be one cell off next to a grid line; settle on the cell
    // whose decoded bounds hold `v`.
    if index > 0 && v < grid_line(index, cells, min, scale) {
        index -= 1;
    } else if index < last && v > grid_line(index + 1, cells, min, scale) {
        index += 1;
    }
    index
}

/// Scales a coordinate to integer grid indices at `precision`.
fn grid_coords(lat: f64, lon: f64, precision: u8) -> (u64, u64) {
    if !(LAT_MIN..=LAT_MAX).contains(&lat) || !(LON_MIN..=LON_MAX).contains(&lon) {
        log::warn!(
            "Coordinate ({}, {}) is outside the encodable range, clamping to the border cell",
            lat,
            lon
        );
    }

    (
        axis_index(lat, LAT_MIN, LAT_SCALE, precision),
        axis_index(lon, LON_MIN, LON_SCALE, precision),
    )
}
