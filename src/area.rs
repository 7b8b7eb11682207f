//! Decoded cell footprints.

use std::fmt;

use geo::{Point, Rect, coord};
use serde::Serialize;

/// A rectangular cell footprint bounded by min/max latitude and longitude.
///
/// Only produced by [`Hash::decode`](crate::Hash::decode), so `min <= max`
/// holds on both axes. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Area {
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
}

impl Area {
    pub(crate) fn from_bounds(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Self {
        debug_assert!(min_lat <= max_lat && min_lon <= max_lon);
        Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    pub fn min_lat(&self) -> f64 {
        self.min_lat
    }

    pub fn max_lat(&self) -> f64 {
        self.max_lat
    }

    pub fn min_lon(&self) -> f64 {
        self.min_lon
    }

    pub fn max_lon(&self) -> f64 {
        self.max_lon
    }

    /// Centroid as `(lat, lon)`.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    /// Centroid as a `geo::Point` (x = longitude, y = latitude).
    pub fn center_point(&self) -> Point {
        let (lat, lon) = self.center();
        Point::new(lon, lat)
    }

    /// Returns true if the coordinate lies within the area, borders included.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        self.min_lat <= lat && lat <= self.max_lat && self.min_lon <= lon && lon <= self.max_lon
    }

    /// Height in degrees of latitude.
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Width in degrees of longitude.
    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Converts to a `geo::Rect` with longitude on x and latitude on y.
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            coord! { x: self.min_lon, y: self.min_lat },
            coord! { x: self.max_lon, y: self.max_lat },
        )
    }
}

impl From<Area> for Rect {
    fn from(area: Area) -> Self {
        area.to_rect()
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.min_lat, self.max_lat, self.min_lon, self.max_lon
        )
    }
}
