//! Zooming between precision levels.
//!
//! Each precision step adds one bit per axis, i.e. two interleaved bits at the
//! bottom of the value, so parents and children are plain shifts.

use crate::error::{GeohashError, Result};
use crate::hash::{Hash, PRECISION_MAX, PRECISION_MIN};

impl Hash {
    /// Zooms out one level.
    ///
    /// Fails with [`GeohashError::InvalidPrecision`] at `PRECISION_MIN`.
    ///
    /// ```
    /// use morton_geohash::Hash;
    ///
    /// let hash = Hash::with_precision(540889543224597, 25)?;
    /// let parent = hash.parent()?;
    /// assert_eq!(parent.value(), 135222385806149);
    /// assert_eq!(parent.precision(), 24);
    /// # Ok::<(), morton_geohash::GeohashError>(())
    /// ```
    pub fn parent(&self) -> Result<Hash> {
        if self.precision() <= PRECISION_MIN {
            return Err(GeohashError::InvalidPrecision(
                self.precision().saturating_sub(1),
            ));
        }
        Ok(Hash::from_parts(self.value() >> 2, self.precision() - 1))
    }

    /// Zooms in one level, returning the four sub-cells.
    ///
    /// The two new low bits select the latitude half (bit 0) and the longitude
    /// half (bit 1), giving the order SW, NW, SE, NE. Returns `None` at
    /// `PRECISION_MAX`.
    pub fn children(&self) -> Option<[Hash; 4]> {
        if self.precision() >= PRECISION_MAX {
            return None;
        }
        let precision = self.precision() + 1;
        let base = self.value() << 2;
        Some([0, 1, 2, 3].map(|quadrant| Hash::from_parts(base | quadrant, precision)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_chain() {
        let hash = Hash::encode(51.5246323180, -0.0841140747);

        let p1 = hash.parent().unwrap();
        assert_eq!(p1.precision(), 25);
        assert_eq!(p1.value(), 540889543224597);

        let p2 = p1.parent().unwrap();
        assert_eq!(p2.precision(), 24);
        assert_eq!(p2.value(), 135222385806149);
    }

    #[test]
    fn test_parent_at_min_precision() {
        let root = Hash::with_precision(0, 1).unwrap();
        assert_eq!(root.parent(), Err(GeohashError::InvalidPrecision(0)));
    }

    #[test]
    fn test_children() {
        let hash = Hash::with_precision(135222385806149, 24).unwrap();
        let subs = hash.children().unwrap();

        for sub in &subs {
            assert_eq!(sub.precision(), 25);
        }
        assert_eq!(subs[0].value(), 540889543224596);
        assert_eq!(subs[1].value(), 540889543224597);
        assert_eq!(subs[2].value(), 540889543224598);
        assert_eq!(subs[3].value(), 540889543224599);
    }

    #[test]
    fn test_children_at_max_precision() {
        assert!(Hash::new(0).unwrap().children().is_none());
    }

    #[test]
    fn test_children_quadrants() {
        let root = Hash::with_precision(0, 1).unwrap();
        let [sw, nw, se, ne] = root.children().unwrap();
        let center = root.decode().center();

        let (lat, lon) = sw.decode().center();
        assert!(lat < center.0 && lon < center.1);
        let (lat, lon) = nw.decode().center();
        assert!(lat > center.0 && lon < center.1);
        let (lat, lon) = se.decode().center();
        assert!(lat < center.0 && lon > center.1);
        let (lat, lon) = ne.decode().center();
        assert!(lat > center.0 && lon > center.1);
    }

    #[test]
    fn test_children_parent_roundtrip() {
        let hash = Hash::encode_with_precision(-33.8688, 151.2093, 12).unwrap();
        for child in hash.children().unwrap() {
            assert_eq!(child.parent().unwrap(), hash);
        }
        let siblings = hash.parent().unwrap().children().unwrap();
        assert!(siblings.contains(&hash));
    }

    #[test]
    fn test_children_cover_parent_area() {
        let hash = Hash::encode_with_precision(40.7128, -74.0060, 8).unwrap();
        let area = hash.decode();
        for child in hash.children().unwrap() {
            let sub = child.decode();
            assert!(area.contains(sub.min_lat(), sub.min_lon()));
            assert!(area.contains(sub.max_lat(), sub.max_lon()));
        }
    }
}
