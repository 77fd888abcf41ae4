//! Engines seeded from a [`SeedSequence`].
//!
//! [`MtEngine`] resolves at build time to the Mersenne Twister that suits
//! the target's word width: MT19937-64 on 64-bit targets, MT19937 elsewhere.
//! [`make_mt_engine`] returns one seeded from every source.
//!
//! ```no_run
//! use rand::Rng;
//!
//! let mut mt = seedsource_core::make_mt_engine().unwrap();
//! let x: f64 = mt.random();
//! assert!((0.0..1.0).contains(&x));
//! ```
//!
//! Any `rand` engine can be seeded the same way with [`seed_rng`].

use rand::{RngCore, SeedableRng};
use rand_mt::{Mt, Mt64};

use crate::error::Result;
use crate::flags::SourceFlags;
use crate::platform::NATIVE_ENGINE;
use crate::sequence::{SeedSequence, SourceSeq};

/// State size of both Mersenne Twister variants, in 32-bit words.
const MT_STATE_WORDS: usize = 624;

/// Engines that can be constructed from a seed sequence.
pub trait FromSeedSequence: Sized {
    /// Build a fully seeded engine. Calls `seq.generate` exactly once.
    fn from_seed_seq<S: SeedSequence>(seq: &S) -> Result<Self>;
}

/// MT19937 seeded from a seed sequence.
#[derive(Debug, Clone)]
pub struct MtEngine32(Mt);

/// MT19937-64 seeded from a seed sequence.
#[derive(Debug, Clone)]
pub struct MtEngine64(Mt64);

/// Mersenne Twister matching the native word width.
#[cfg(target_pointer_width = "64")]
pub type MtEngine = MtEngine64;

/// Mersenne Twister matching the native word width.
#[cfg(not(target_pointer_width = "64"))]
pub type MtEngine = MtEngine32;

impl FromSeedSequence for MtEngine32 {
    fn from_seed_seq<S: SeedSequence>(seq: &S) -> Result<Self> {
        let mut words = vec![0u32; MT_STATE_WORDS];
        seq.generate(&mut words)?;
        Ok(Self(Mt::new_with_key(words)))
    }
}

impl FromSeedSequence for MtEngine64 {
    fn from_seed_seq<S: SeedSequence>(seq: &S) -> Result<Self> {
        let mut words = vec![0u32; MT_STATE_WORDS];
        seq.generate(&mut words)?;
        Ok(Self(Mt64::new_with_key(join_pairs(&words))))
    }
}

/// Combine word pairs into 64-bit keys, low word first.
fn join_pairs(words: &[u32]) -> Vec<u64> {
    words
        .chunks_exact(2)
        .map(|pair| u64::from(pair[0]) | (u64::from(pair[1]) << 32))
        .collect()
}

impl RngCore for MtEngine32 {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.0.fill_bytes(dst)
    }
}

impl RngCore for MtEngine64 {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.0.fill_bytes(dst)
    }
}

/// Native Mersenne Twister seeded from every source.
pub fn make_mt_engine() -> Result<MtEngine> {
    make_mt_engine_with(SourceFlags::ALL)
}

/// Native Mersenne Twister seeded from the given sources.
///
/// An empty or unknown-only `flags` value produces the same engine on every
/// run; see [`crate::sequence`].
pub fn make_mt_engine_with(flags: SourceFlags) -> Result<MtEngine> {
    log::debug!("engine: {} from {}", NATIVE_ENGINE, flags);
    MtEngine::from_seed_seq(&SourceSeq::new(flags))
}

/// Seed any `rand` engine from a seed sequence.
///
/// Generates enough words to cover `R::Seed` and lays them out little-endian.
pub fn seed_rng<R, S>(seq: &S) -> Result<R>
where
    R: SeedableRng,
    S: SeedSequence,
{
    let mut seed = R::Seed::default();
    let bytes = seed.as_mut();
    let mut words = vec![0u32; bytes.len().div_ceil(4)];
    seq.generate(&mut words)?;
    for (chunk, word) in bytes.chunks_mut(4).zip(&words) {
        let le = word.to_le_bytes();
        chunk.copy_from_slice(&le[..chunk.len()]);
    }
    Ok(R::from_seed(seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditioning::SeedSeq;
    use rand::Rng;
    use rand::rngs::StdRng;
    use std::cell::Cell;

    /// Writes 0, 1, 2, ... and counts generate calls.
    struct IndexSeq {
        calls: Cell<usize>,
    }

    impl SeedSequence for IndexSeq {
        fn generate(&self, out: &mut [u32]) -> Result<()> {
            self.calls.set(self.calls.get() + 1);
            for (i, w) in out.iter_mut().enumerate() {
                *w = i as u32;
            }
            Ok(())
        }

        fn size(&self) -> usize {
            0
        }

        fn param<E: Extend<u32>>(&self, _sink: &mut E) {}
    }

    fn sample<R: RngCore>(rng: &mut R) -> Vec<u64> {
        (0..8).map(|_| rng.next_u64()).collect()
    }

    #[test]
    fn mt32_uses_full_state_of_words() {
        let seq = IndexSeq { calls: Cell::new(0) };
        let mut engine = MtEngine32::from_seed_seq(&seq).unwrap();
        assert_eq!(seq.calls.get(), 1);

        let mut expected = Mt::new_with_key((0..MT_STATE_WORDS as u32).collect::<Vec<_>>());
        for _ in 0..16 {
            assert_eq!(engine.next_u32(), expected.next_u32());
        }
    }

    #[test]
    fn mt64_joins_low_then_high() {
        let seq = IndexSeq { calls: Cell::new(0) };
        let mut engine = MtEngine64::from_seed_seq(&seq).unwrap();
        assert_eq!(seq.calls.get(), 1);

        let key: Vec<u64> = (0..312u64).map(|i| (2 * i) | ((2 * i + 1) << 32)).collect();
        let mut expected = Mt64::new_with_key(key);
        for _ in 0..16 {
            assert_eq!(engine.next_u64(), expected.next_u64());
        }
    }

    #[test]
    fn join_pairs_order() {
        assert_eq!(
            join_pairs(&[0xAAAA_AAAA, 0x1111_1111, 1, 2]),
            [0x1111_1111_AAAA_AAAA, 0x0000_0002_0000_0001]
        );
    }

    #[test]
    fn degenerate_engines_repeat() {
        let mut a = make_mt_engine_with(SourceFlags::empty()).unwrap();
        let mut b = make_mt_engine_with(SourceFlags::empty()).unwrap();
        assert_eq!(sample(&mut a), sample(&mut b));
    }

    #[test]
    fn default_engines_differ() {
        let mut a = make_mt_engine().unwrap();
        let mut b = make_mt_engine().unwrap();
        assert_ne!(sample(&mut a), sample(&mut b));
    }

    #[test]
    fn engine_drives_rand_samplers() {
        let mut mt = make_mt_engine().unwrap();
        for _ in 0..100 {
            let x: f64 = mt.random();
            assert!((0.0..1.0).contains(&x));
            let d = mt.random_range(1..=6);
            assert!((1..=6).contains(&d));
        }
    }

    #[test]
    fn seed_rng_is_deterministic_for_fixed_pool() {
        let seq = SeedSeq::new([1, 2, 3]);
        let mut a: StdRng = seed_rng(&seq).unwrap();
        let mut b: StdRng = seed_rng(&seq).unwrap();
        assert_eq!(sample(&mut a), sample(&mut b));

        let mut a: StdRng = seed_rng(&seq).unwrap();
        let mut c: StdRng = seed_rng(&SeedSeq::new([1, 2, 4])).unwrap();
        assert_ne!(sample(&mut a), sample(&mut c));
    }

    #[test]
    fn seed_rng_lays_words_little_endian() {
        let seq = IndexSeq { calls: Cell::new(0) };
        let mut rng: StdRng = seed_rng(&seq).unwrap();
        let mut seed = [0u8; 32];
        for (i, chunk) in seed.chunks_mut(4).enumerate() {
            chunk.copy_from_slice(&(i as u32).to_le_bytes());
        }
        let mut expected = StdRng::from_seed(seed);
        assert_eq!(sample(&mut rng), sample(&mut expected));
        assert_eq!(seq.calls.get(), 1);
    }
}
