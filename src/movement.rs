//! Neighbor navigation on the interleaved representation.
//!
//! Moving along one axis is an add/subtract on one lattice plane of the value
//! (odd bits for longitude, even bits for latitude). The other plane's bits
//! are filled with ones before adding so carries hop across them, then the
//! result is masked back to the plane and recombined with the untouched
//! bits. Moves wrap silently modulo `2^precision` cells per axis.

use serde::{Deserialize, Serialize};

use crate::bits::{EVEN_BITS, ODD_BITS, interleave, plane_mask};
use crate::hash::Hash;

/// Compass direction of an adjacent cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Cell offset as `(east, north)` steps.
    pub fn offset(self) -> (i64, i64) {
        match self {
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, -1),
            Direction::South => (0, -1),
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
        }
    }
}

impl Hash {
    /// Moves `n` cells east (positive) or west (negative).
    ///
    /// ```
    /// use morton_geohash::Hash;
    ///
    /// let hash = Hash::with_precision(135222385806149, 24)?;
    /// assert_eq!(hash.move_x(1).value(), 135222385806151);
    /// assert_eq!(hash.move_x(-1).value(), 135222385805807);
    /// # Ok::<(), morton_geohash::GeohashError>(())
    /// ```
    pub fn move_x(&self, n: i64) -> Hash {
        self.shift_plane(ODD_BITS, n)
    }

    /// Moves `n` cells north (positive) or south (negative).
    pub fn move_y(&self, n: i64) -> Hash {
        self.shift_plane(EVEN_BITS, n)
    }

    /// The adjacent cell in `direction`.
    pub fn neighbor(&self, direction: Direction) -> Hash {
        let (east, north) = direction.offset();
        self.move_x(east).move_y(north)
    }

    /// The eight surrounding cells in [`Direction::ALL`] order.
    pub fn neighbors(&self) -> [Hash; 8] {
        Direction::ALL.map(|direction| self.neighbor(direction))
    }

    fn shift_plane(&self, plane: u64, n: i64) -> Hash {
        if n == 0 {
            return *self;
        }

        let precision = self.precision();
        let plane_bits = plane_mask(plane, precision);
        let gaps = plane_mask(!plane, precision);

        // Only the low `precision` bits of the step count matter once wrapped.
        let count = n.unsigned_abs();
        let step = if plane == ODD_BITS {
            interleave(0, count)
        } else {
            interleave(count, 0)
        };

        let moving = self.value() & plane_bits;
        let fixed = self.value() & !plane_bits;
        let moved = if n > 0 {
            (moving | gaps).wrapping_add(step)
        } else {
            moving.wrapping_sub(step)
        };

        Hash::from_parts((moved & plane_bits) | fixed, precision)
    }
}
