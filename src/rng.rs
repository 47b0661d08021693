//! Seeded pseudo-random stream behind every pattern.
//!
//! The seed string is folded into a 32-bit state with FNV-1a over UTF-16 code units and
//! finished with the murmur3 `fmix32` avalanche, then advanced with xorshift32 (13, 17, 5).
//! Everything is explicit wrapping `u32` arithmetic, and draws are converted to `f64` by a
//! single exact division, so a seed yields the same stream on every platform.

/// Replaces a zero state, which is a fixed point of xorshift.
const ZERO_STATE_FALLBACK: u32 = 0x9E37_79B9;

const TWO_POW_32: f64 = 4_294_967_296.0;

const FNV_OFFSET: u32 = 0x811C_9DC5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Order-dependent 32-bit hash of a seed string.
///
/// Runs over UTF-16 code units so non-ASCII titles hash the same way a browser would
/// see their `charCodeAt` values. The final mix spreads short seeds over the whole state
/// space; xorshift keeps a small state small for its first few steps.
pub fn seed_hash(seed: &str) -> u32 {
    let h = seed.encode_utf16().fold(FNV_OFFSET, |h, unit| {
        (h ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    });
    fmix32(h)
}

fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85EB_CA6B);
    h ^= h >> 13;
    h = h.wrapping_mul(0xC2B2_AE35);
    h ^ (h >> 16)
}

/// Deterministic xorshift32 generator owned by a single generation call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedRng {
    state: u32,
    draws: u64,
}

impl SeedRng {
    pub fn new(state: u32) -> Self {
        Self {
            state: if state == 0 {
                ZERO_STATE_FALLBACK
            } else {
                state
            },
            draws: 0,
        }
    }

    pub fn from_seed(seed: &str) -> Self {
        Self::new(seed_hash(seed))
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        self.draws += 1;
        x
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }

    /// Uniform value in `[lo, hi)`; one draw.
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Index in `[0, len)`; one draw. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        let i = (self.next_f64() * len as f64) as usize;
        i.min(len.saturating_sub(1))
    }

    /// Integer in `[lo, lo + span)`; one draw.
    pub fn count(&mut self, lo: usize, span: usize) -> usize {
        lo + self.index(span.max(1))
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_hash_known_values() {
        // If these change, every previously generated cover changes too.
        assert_eq!(seed_hash(""), 2_872_998_923);
        assert_eq!(seed_hash("a"), 444_641_715);
        assert_eq!(seed_hash("Rosetta"), 1_004_931_232);
        assert_eq!(seed_hash("Hello World"), 1_050_587_080);
        assert_eq!(seed_hash("é😀"), 4_159_213_040);
    }

    #[test]
    fn swapped_equal_weight_pairs_do_not_collide() {
        // "Aa" and "BB" are equal under the plain `h * 31 + unit` fold.
        for (a, b) in [
            ("Aa", "BB"),
            ("Part Aa", "Part BB"),
            ("Release notes Aa", "Release notes BB"),
        ] {
            assert_ne!(seed_hash(a), seed_hash(b), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn two_character_ascii_seeds_hash_uniquely() {
        let mut seen = std::collections::HashSet::new();
        for a in ' '..='~' {
            for b in ' '..='~' {
                assert!(seen.insert(seed_hash(&format!("{a}{b}"))), "{a}{b}");
            }
        }
    }

    #[test]
    fn xorshift_golden_sequence() {
        let mut rng = SeedRng::from_seed("Rosetta");
        assert_eq!(rng.next_u32(), 2_763_837_177);
        assert_eq!(rng.next_u32(), 2_434_660_680);
        assert_eq!(rng.next_u32(), 3_903_398_930);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn zero_state_is_replaced() {
        let mut rng = SeedRng::new(0);
        assert_eq!(rng.next_u32(), 1_359_758_873);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn next_f64_matches_state_over_two_pow_32() {
        let mut rng = SeedRng::from_seed("a");
        let v = rng.next_f64();
        assert_eq!(v, 2_590_780_136.0 / 4_294_967_296.0);
    }

    #[test]
    fn independent_instances_do_not_share_state() {
        let mut a = SeedRng::from_seed("Hello World");
        let mut b = SeedRng::from_seed("Hello World");
        let _ = a.next_u32();
        let _ = a.next_u32();
        let first_b = b.next_u32();
        assert_eq!(first_b, 2_275_185_947);
        for _ in 0..100 {
            let x = a.next_f64();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn index_stays_in_bounds() {
        let mut rng = SeedRng::from_seed("bounds");
        for _ in 0..1000 {
            assert!(rng.index(7) < 7);
            let c = rng.count(3, 4);
            assert!((3..7).contains(&c));
        }
    }
}
