//! Compact exchange formats for [`Hash`].
//!
//! Two layouts are supported:
//!
//! - **Binary**: one precision byte followed by the value as a zig-zag signed
//!   varint (the value is reinterpreted as `i64`). Intended for storage and
//!   wire layers that treat the buffer as opaque.
//! - **Packed**: a single `u64` with the precision in the top 12 bits and the
//!   value in the low 52 bits, which is wide enough for `PRECISION_MAX`.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{GeohashError, Result};
use crate::hash::{Hash, validate_precision};

/// Longest varint encoding of a 64-bit value. Valid hashes need at most 8.
pub const MAX_VARINT_LEN: usize = 10;

/// Bit offset of the precision within the packed representation.
pub const PACKED_PRECISION_SHIFT: u32 = 52;

const PACKED_VALUE_MASK: u64 = (1 << PACKED_PRECISION_SHIFT) - 1;

impl Hash {
    /// Serializes the hash into its binary form.
    ///
    /// ```
    /// use morton_geohash::Hash;
    ///
    /// let hash = Hash::with_precision(503742, 10)?;
    /// assert_eq!(&hash.to_bytes()[..], &[10, 252, 190, 61]);
    /// # Ok::<(), morton_geohash::GeohashError>(())
    /// ```
    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(1 + MAX_VARINT_LEN);
        self.write_bytes(&mut buf);
        buf.freeze()
    }

    /// Appends the binary form to `buf`.
    pub fn write_bytes<B: BufMut>(&self, buf: &mut B) {
        buf.put_u8(self.precision());
        put_varint(buf, self.value() as i64);
    }

    /// Parses a hash from its binary form.
    ///
    /// Buffers shorter than two bytes, truncated or overlong varints,
    /// out-of-range precisions and values wider than `2 * precision` bits are
    /// treated as absent and yield `None`.
    pub fn from_bytes(mut buf: &[u8]) -> Option<Hash> {
        if buf.len() < 2 {
            return None;
        }

        let precision = buf.get_u8();
        if validate_precision(precision).is_err() {
            log::debug!("Ignoring geohash buffer with precision {}", precision);
            return None;
        }

        let Some(value) = get_varint(&mut buf) else {
            log::debug!("Ignoring geohash buffer with malformed varint");
            return None;
        };

        match Hash::with_precision(value as u64, precision) {
            Ok(hash) => Some(hash),
            Err(_) => {
                log::debug!(
                    "Ignoring geohash buffer with value {} wider than precision {}",
                    value as u64,
                    precision
                );
                None
            }
        }
    }

    /// Replaces `self` with the hash decoded from `buf`, leaving it untouched
    /// when [`Hash::from_bytes`] would return `None`.
    pub fn read_bytes(&mut self, buf: &[u8]) {
        if let Some(hash) = Hash::from_bytes(buf) {
            *self = hash;
        }
    }

    /// Packs precision and value into a single integer.
    ///
    /// ```
    /// use morton_geohash::Hash;
    ///
    /// let hash = Hash::encode_with_precision(51.52463, -0.08411, 20)?;
    /// assert_eq!(hash.to_packed(), 90072520759854475);
    /// # Ok::<(), morton_geohash::GeohashError>(())
    /// ```
    pub fn to_packed(&self) -> u64 {
        ((self.precision() as u64) << PACKED_PRECISION_SHIFT) | (self.value() & PACKED_VALUE_MASK)
    }

    /// Unpacks a value produced by [`Hash::to_packed`].
    pub fn from_packed(packed: u64) -> Result<Hash> {
        let precision = u8::try_from(packed >> PACKED_PRECISION_SHIFT)
            .map_err(|_| GeohashError::InvalidPrecision(u8::MAX))?;
        Hash::with_precision(packed & PACKED_VALUE_MASK, precision)
    }
}

fn put_varint<B: BufMut>(buf: &mut B, n: i64) {
    let mut zigzag = ((n << 1) ^ (n >> 63)) as u64;
    while zigzag >= 0x80 {
        buf.put_u8((zigzag as u8 & 0x7f) | 0x80);
        zigzag >>= 7;
    }
    buf.put_u8(zigzag as u8);
}

fn get_varint<B: Buf>(buf: &mut B) -> Option<i64> {
    let mut zigzag: u64 = 0;
    let mut shift = 0u32;
    for i in 0..MAX_VARINT_LEN {
        if !buf.has_remaining() {
            return None;
        }
        let byte = buf.get_u8();
        if byte < 0x80 {
            // The tenth byte may only carry the top bit of the value.
            if i == MAX_VARINT_LEN - 1 && byte > 1 {
                return None;
            }
            zigzag |= (byte as u64) << shift;
            let n = (zigzag >> 1) as i64;
            return Some(if zigzag & 1 != 0 { !n } else { n });
        }
        zigzag |= ((byte & 0x7f) as u64) << shift;
        shift += 7;
    }
    None
}
