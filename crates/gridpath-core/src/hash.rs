//! Deterministic coordinate hashing.
//!
//! Coordinates key every map the search engine keeps. Instead of relying on
//! the randomly seeded default hasher, keys are built from Szudzik's pairing
//! function so that the same coordinate always hashes to the same value on
//! every run and platform.

use std::collections::HashMap;
use std::hash::{BuildHasherDefault, Hasher};

use crate::geom::Coord;

/// Map keyed by [`Coord`] using [`CoordHasher`].
pub type CoordMap<V> = HashMap<Coord, V, BuildCoordHasher>;

/// `BuildHasher` for [`CoordHasher`].
pub type BuildCoordHasher = BuildHasherDefault<CoordHasher>;

/// Odd multiplier (2^64 / φ). Multiplication by an odd constant is a
/// bijection on `u64`, so spreading bits this way keeps keys injective.
const SPREAD: u64 = 0x9E37_79B9_7F4A_7C15;

/// Fold a signed integer onto the naturals: 0, -1, 1, -2, 2, ... → 0, 1, 2, 3, 4, ...
#[inline]
const fn zigzag(n: i32) -> u64 {
    if n >= 0 {
        2 * n as u64
    } else {
        // -2n - 1 without overflowing on i32::MIN.
        2 * ((-(n as i64)) as u64) - 1
    }
}

/// Szudzik's pairing of two signed integers into one `u64`.
///
/// Each component is zigzag-folded to `[0, 2^32)` first, so the result is
/// injective over all of `i32 x i32` and never exceeds `u64::MAX`.
#[inline]
pub const fn szudzik(a: i32, b: i32) -> u64 {
    let a = zigzag(a);
    let b = zigzag(b);
    if a >= b { a * a + a + b } else { a + b * b }
}

/// Hasher fed by [`Coord`]'s `Hash` impl, which writes its pairing key.
///
/// Other inputs are folded in byte by byte so the hasher stays usable for
/// arbitrary keys, but only `Coord` keys are guaranteed collision-free.
#[derive(Clone, Copy, Debug, Default)]
pub struct CoordHasher {
    state: u64,
}

impl Hasher for CoordHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.state.wrapping_mul(SPREAD)
    }

    #[inline]
    fn write_u64(&mut self, n: u64) {
        self.state = self.state.rotate_left(32) ^ n;
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state = (self.state ^ b as u64).wrapping_mul(0x100_0000_01B3);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;
    use std::hash::{BuildHasher, Hash};

    #[test]
    fn zigzag_order() {
        assert_eq!(zigzag(0), 0);
        assert_eq!(zigzag(-1), 1);
        assert_eq!(zigzag(1), 2);
        assert_eq!(zigzag(-2), 3);
        assert_eq!(zigzag(i32::MAX), u32::MAX as u64 - 1);
        assert_eq!(zigzag(i32::MIN), u32::MAX as u64);
    }

    #[test]
    fn pairing_small_values() {
        assert_eq!(szudzik(0, 0), 0);
        assert_eq!(szudzik(0, -1), 1);
        assert_eq!(szudzik(-1, 0), 2);
        assert_eq!(szudzik(-1, -1), 3);
    }

    #[test]
    fn pairing_extremes_do_not_overflow() {
        assert_eq!(szudzik(i32::MIN, i32::MIN), u64::MAX);
        assert!(szudzik(i32::MIN, i32::MAX) < u64::MAX);
        assert!(szudzik(i32::MAX, i32::MIN) < u64::MAX);
    }

    #[test]
    fn pairing_unique_on_window() {
        let mut seen = HashSet::new();
        for r in -20..=20 {
            for c in -20..=20 {
                assert!(seen.insert(szudzik(r, c)), "collision at ({r}, {c})");
            }
        }
    }

    #[test]
    fn coord_hash_is_deterministic() {
        let b = BuildCoordHasher::default();
        let h = |c: Coord| {
            let mut s = b.build_hasher();
            c.hash(&mut s);
            s.finish()
        };
        assert_eq!(h(Coord::new(3, -4)), h(Coord::new(3, -4)));
        assert_ne!(h(Coord::new(3, -4)), h(Coord::new(-4, 3)));
    }

    #[test]
    fn coord_map_basics() {
        let mut m: CoordMap<u32> = CoordMap::default();
        m.insert(Coord::new(-1, 0), 1);
        m.insert(Coord::new(0, -1), 2);
        assert_eq!(m.get(&Coord::new(-1, 0)), Some(&1));
        assert_eq!(m.get(&Coord::new(0, -1)), Some(&2));
        assert_eq!(m.len(), 2);
    }

    proptest! {
        #[test]
        fn pairing_is_injective(a in any::<i32>(), b in any::<i32>(), c in any::<i32>(), d in any::<i32>()) {
            prop_assume!((a, b) != (c, d));
            prop_assert_ne!(szudzik(a, b), szudzik(c, d));
        }
    }
}
