//! Integer geohashes built on Z-order (Morton) bit interleaving.
//!
//! A coordinate is scaled onto a `2^precision` x `2^precision` grid and the two
//! grid indices are interleaved into one `u64`. Zooming out, zooming in and
//! stepping to neighboring cells are all done on the interleaved bits.
//!
//! ```rust
//! use morton_geohash::{Direction, Hash};
//!
//! let hash = Hash::encode_with_precision(51.52463, -0.08411, 20)?;
//! assert_eq!(hash.value(), 528212444555);
//!
//! let area = hash.decode();
//! let (lat, lon) = area.center();
//! assert_eq!(format!("{:.5},{:.5}", lat, lon), "51.52460,-0.08394");
//!
//! let parent = hash.parent()?;
//! assert!(parent.children().unwrap().contains(&hash));
//!
//! let east = hash.neighbor(Direction::East);
//! assert_eq!(east, hash.move_x(1));
//! # Ok::<(), morton_geohash::GeohashError>(())
//! ```

pub mod area;
pub mod binary;
pub mod bits;
pub mod config;
pub mod error;
pub mod hash;
pub mod hierarchy;
pub mod movement;

pub use area::Area;
pub use config::Config;
pub use error::{GeohashError, Result};
pub use hash::{Hash, LAT_MAX, LAT_MIN, LON_MAX, LON_MIN, PRECISION_MAX, PRECISION_MIN};
pub use movement::Direction;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{Area, Config, Direction, GeohashError, Hash, Result};

    pub use crate::{LAT_MAX, LAT_MIN, LON_MAX, LON_MIN, PRECISION_MAX, PRECISION_MIN};
}
