//! The seed sequence protocol and the flag-driven [`SourceSeq`].
//!
//! A seed sequence fills an output buffer of any length with 32-bit seed
//! words, reports how many configuration words it holds, and writes those
//! words out. Engines consume it through [`crate::engine::FromSeedSequence`].
//!
//! [`SourceSeq`] holds nothing but a [`SourceFlags`] word. Every call to
//! [`SeedSequence::generate`] samples its sources afresh, so two calls on the
//! same value normally return different words.
//!
//! # Generation
//!
//! - Device only: every output word is an independent OS entropy sample.
//! - Any clock selected: each selected clock contributes its nanosecond
//!   count as two words (high first; wall clock before monotonic clock).
//!   That pool of 2 or 4 words is diffused over the output with
//!   [`SeedSeq`]. If the device is also selected, a second pass XORs a fresh
//!   device sample into every position.
//! - Nothing selected (or only unknown bits): an empty [`SeedSeq`] fills the
//!   output. **This seed is the same on every run.** It is accepted so that
//!   the configuration space has no error cases, but it defeats the point of
//!   seeding from live sources and should not be used for real seeding.

use serde::{Deserialize, Serialize};

use crate::conditioning::{SeedSeq, xor_words};
use crate::error::Result;
use crate::flags::SourceFlags;
use crate::source::{EntropySource, OsEntropy, SystemClocks, TimeSource, split_nanos};

/// A source of seed words for pseudo-random engines.
pub trait SeedSequence {
    /// Fill `out` completely with seed words.
    fn generate(&self, out: &mut [u32]) -> Result<()>;

    /// Number of configuration words.
    fn size(&self) -> usize;

    /// Write exactly [`SeedSequence::size`] configuration words to `sink`.
    fn param<E: Extend<u32>>(&self, sink: &mut E);
}

/// Seed sequence drawing on the OS entropy device and the host clocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceSeq {
    flags: SourceFlags,
}

impl SourceSeq {
    /// Sequence over the given sources. Unknown bits are stored untouched.
    pub const fn new(flags: SourceFlags) -> Self {
        Self { flags }
    }

    /// OR a list of raw flag words together. An empty list selects nothing.
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        Self::new(SourceFlags::from_words(words))
    }

    /// The configured flags, as stored.
    pub const fn flags(&self) -> SourceFlags {
        self.flags
    }

    /// Fill `out` using caller-supplied entropy and clocks.
    pub fn generate_with<E, T>(&self, out: &mut [u32], entropy: &mut E, clocks: &T) -> Result<()>
    where
        E: EntropySource + ?Sized,
        T: TimeSource + ?Sized,
    {
        let flags = self.flags.known();

        if flags == SourceFlags::RANDOM_DEVICE {
            log::debug!(
                "seed: {} words straight from {}",
                out.len(),
                entropy.name()
            );
            return entropy.fill_words(out);
        }

        let mut pool = [0u32; 4];
        let mut len = 0;
        if flags.contains(SourceFlags::SYSTEM_CLOCK) {
            pool[len..len + 2].copy_from_slice(&split_nanos(clocks.system_nanos()));
            len += 2;
        }
        if flags.contains(SourceFlags::STEADY_CLOCK) {
            pool[len..len + 2].copy_from_slice(&split_nanos(clocks.steady_nanos()));
            len += 2;
        }

        if len == 0 {
            log::warn!(
                "seed: no entropy source selected (flags {:#x}); output is reproducible",
                self.flags.word()
            );
        } else {
            log::debug!(
                "seed: diffusing {} clock words over {} outputs ({})",
                len,
                out.len(),
                flags
            );
        }
        SeedSeq::new(pool[..len].iter().copied()).mix_into(out);

        if flags.contains(SourceFlags::RANDOM_DEVICE) {
            let mut noise = vec![0u32; out.len()];
            entropy.fill_words(&mut noise)?;
            xor_words(out, &noise);
            log::trace!("seed: xored {} words from {}", noise.len(), entropy.name());
        }
        Ok(())
    }
}

impl SeedSequence for SourceSeq {
    fn generate(&self, out: &mut [u32]) -> Result<()> {
        self.generate_with(out, &mut OsEntropy, &SystemClocks)
    }

    fn size(&self) -> usize {
        1
    }

    fn param<E: Extend<u32>>(&self, sink: &mut E) {
        sink.extend([self.flags.word()]);
    }
}

impl From<SourceFlags> for SourceSeq {
    fn from(flags: SourceFlags) -> Self {
        Self::new(flags)
    }
}

impl FromIterator<SourceFlags> for SourceSeq {
    fn from_iter<I: IntoIterator<Item = SourceFlags>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
