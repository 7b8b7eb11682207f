//! Morton (Z-order) bit interleaving.
//!
//! Two 32-bit grid coordinates are merged into one 64-bit word: bit `2i` of
//! the result is bit `i` of `x`, bit `2i + 1` is bit `i` of `y`. Spreading is
//! done with a fixed sieve of shift-and-mask steps rather than a per-bit loop.

/// Every even bit. Selects the `x` (latitude) plane of an interleaved word.
pub const EVEN_BITS: u64 = 0x5555_5555_5555_5555;
/// Every odd bit. Selects the `y` (longitude) plane of an interleaved word.
pub const ODD_BITS: u64 = 0xAAAA_AAAA_AAAA_AAAA;

const PAIRS: u64 = 0x3333_3333_3333_3333;
const NIBBLES: u64 = 0x0F0F_0F0F_0F0F_0F0F;
const BYTES: u64 = 0x00FF_00FF_00FF_00FF;
const HALVES: u64 = 0x0000_FFFF_0000_FFFF;
const LOW_WORD: u64 = 0x0000_0000_FFFF_FFFF;

/// Spreads the low 32 bits of `v` onto the even bit positions.
#[inline]
const fn spread(mut v: u64) -> u64 {
    v &= LOW_WORD;
    v = (v | (v << 16)) & HALVES;
    v = (v | (v << 8)) & BYTES;
    v = (v | (v << 4)) & NIBBLES;
    v = (v | (v << 2)) & PAIRS;
    (v | (v << 1)) & EVEN_BITS
}

/// Collects the even bits of `v` back into a contiguous 32-bit value.
#[inline]
const fn compact(mut v: u64) -> u64 {
    v &= EVEN_BITS;
    v = (v | (v >> 1)) & PAIRS;
    v = (v | (v >> 2)) & NIBBLES;
    v = (v | (v >> 4)) & BYTES;
    v = (v | (v >> 8)) & HALVES;
    (v | (v >> 16)) & LOW_WORD
}

/// Interleaves `x` onto the even bits and `y` onto the odd bits.
///
/// Only the low 32 bits of each input take part.
///
/// ```
/// use morton_geohash::bits::interleave;
///
/// assert_eq!(interleave(1, 0), 1);
/// assert_eq!(interleave(0, 1), 2);
/// assert_eq!(interleave(345, 456), 242113);
/// ```
#[inline]
pub const fn interleave(x: u64, y: u64) -> u64 {
    spread(x) | (spread(y) << 1)
}

/// Exact inverse of [`interleave`].
///
/// ```
/// use morton_geohash::bits::deinterleave;
///
/// assert_eq!(deinterleave(242113), (345, 456));
/// ```
#[inline]
pub const fn deinterleave(n: u64) -> (u64, u64) {
    (compact(n), compact(n >> 1))
}

/// Mask of the significant bits of one lattice plane for a field that is
/// `2 * precision` bits wide.
#[inline]
pub(crate) const fn plane_mask(plane: u64, precision: u8) -> u64 {
    plane >> (64 - 2 * precision as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VECTORS: &[(u64, u64, u64)] = &[
        (0, 0, 0),
        (1, 0, 1),
        (0, 1, 2),
        (1, 1, 3),
        (2, 2, 12),
        (345, 456, 242113),
        (28116097, 17974564, 921773536331809),
    ];

    #[test]
    fn test_interleave_known_vectors() {
        for &(x, y, i) in VECTORS {
            assert_eq!(interleave(x, y), i, "interleave({}, {})", x, y);
        }
    }

    #[test]
    fn test_deinterleave_known_vectors() {
        for &(x, y, i) in VECTORS {
            assert_eq!(deinterleave(i), (x, y), "deinterleave({})", i);
        }
    }

    #[test]
    fn test_full_width_coordinates() {
        let max = u32::MAX as u64;
        assert_eq!(interleave(max, 0), EVEN_BITS);
        assert_eq!(interleave(0, max), ODD_BITS);
        assert_eq!(interleave(max, max), u64::MAX);
        assert_eq!(deinterleave(u64::MAX), (max, max));
    }

    #[test]
    fn test_high_bits_are_ignored() {
        assert_eq!(interleave(1 << 32 | 5, 1 << 40 | 3), interleave(5, 3));
    }

    #[test]
    fn test_plane_mask_width() {
        assert_eq!(plane_mask(EVEN_BITS, 1), 0b01);
        assert_eq!(plane_mask(ODD_BITS, 1), 0b10);
        assert_eq!(plane_mask(EVEN_BITS, 2), 0b0101);
        assert_eq!(plane_mask(EVEN_BITS | ODD_BITS, 26), (1 << 52) - 1);
    }
}
