//! Seed source selection flags.
//!
//! Three sources of (hopefully) non-repeatable data can feed a seed sequence.
//! They combine with bitwise-OR:
//!
//! - **RANDOM_DEVICE**: the OS entropy device (`getrandom`). Ideally quality
//!   output from something like `/dev/urandom`, usable directly as a seed.
//!   On a broken platform it is the one source whose quality cannot be
//!   checked from here.
//! - **SYSTEM_CLOCK**: the wall clock in nanoseconds since the Unix epoch.
//!   Practically never repeats, but can if the clock is stepped backwards by
//!   time synchronisation, or if someone games it on purpose.
//! - **STEADY_CLOCK**: the monotonic clock. Never repeats within a boot and
//!   may have finer resolution, but some platforms zero it at process start,
//!   so a seed taken right at launch can land on a narrow range of values.
//!
//! [`SourceFlags::ALL`] combines all three and is the default.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Active entropy sources for a seed sequence (32-bit configuration word).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct SourceFlags: u32 {
        /// OS entropy device
        const RANDOM_DEVICE = 0x0000_0001;

        /// Wall clock, nanoseconds since the Unix epoch
        const SYSTEM_CLOCK = 0x0000_0002;

        /// Monotonic clock
        const STEADY_CLOCK = 0x0000_0004;

        /// Every known source
        const ALL = Self::RANDOM_DEVICE.bits()
            | Self::SYSTEM_CLOCK.bits()
            | Self::STEADY_CLOCK.bits();
    }
}

impl SourceFlags {
    /// Wrap a raw configuration word.
    ///
    /// Infallible: bits outside [`SourceFlags::ALL`] are kept as-is and only
    /// dropped by [`SourceFlags::known`] when seed data is generated.
    #[must_use]
    pub const fn from_word(word: u32) -> Self {
        Self::from_bits_retain(word)
    }

    /// The raw configuration word, unknown bits included.
    #[must_use]
    pub const fn word(self) -> u32 {
        self.bits()
    }

    /// OR together a sequence of raw words, starting from zero.
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        Self::from_word(words.into_iter().fold(0, |acc, w| acc | w))
    }

    /// Mask off every bit that does not name a known source.
    #[must_use]
    pub const fn known(self) -> Self {
        Self::from_bits_truncate(self.bits())
    }

    /// True when no live source is selected, i.e. neither the device nor a
    /// clock. Seeding from such a set is reproducible from run to run.
    #[must_use]
    pub const fn is_degenerate(self) -> bool {
        !self.intersects(Self::ALL)
    }
}

impl Default for SourceFlags {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<u32> for SourceFlags {
    fn from(word: u32) -> Self {
        Self::from_word(word)
    }
}

impl fmt::Display for SourceFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

impl FromStr for SourceFlags {
    type Err = bitflags::parser::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        bitflags::parser::from_str(s)
    }
}
