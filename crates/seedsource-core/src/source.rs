//! Entropy and clock capabilities.
//!
//! Seed generation never touches process-wide state directly. It draws from
//! an [`EntropySource`] and reads a [`TimeSource`], both passed in by the
//! caller. [`OsEntropy`] and [`SystemClocks`] are the real implementations;
//! tests substitute deterministic fakes.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::error::Result;

/// Metadata about an entropy source.
#[derive(Debug, Clone)]
pub struct SourceInfo {
    /// Unique identifier (e.g. `"os_entropy"`).
    pub name: &'static str,
    /// One-line human-readable description.
    pub description: &'static str,
}

/// A source of uniformly distributed 32-bit words.
pub trait EntropySource {
    /// Source metadata.
    fn info(&self) -> &SourceInfo;

    /// Draw one sample covering the full `u32` range.
    fn next_word(&mut self) -> Result<u32>;

    /// Fill `out` with one independent sample per position.
    fn fill_words(&mut self, out: &mut [u32]) -> Result<()> {
        for word in out.iter_mut() {
            *word = self.next_word()?;
        }
        Ok(())
    }

    /// Convenience: name from info.
    fn name(&self) -> &'static str {
        self.info().name
    }
}

// ---------------------------------------------------------------------------
// OsEntropy
// ---------------------------------------------------------------------------

/// The operating system's entropy device, read through `getrandom`.
///
/// Faults are returned as-is; there is no retry and no weaker fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

static OS_ENTROPY_INFO: SourceInfo = SourceInfo {
    name: "os_entropy",
    description: "Operating system CSPRNG via getrandom",
};

impl EntropySource for OsEntropy {
    fn info(&self) -> &SourceInfo {
        &OS_ENTROPY_INFO
    }

    fn next_word(&mut self) -> Result<u32> {
        Ok(getrandom::u32()?)
    }

    fn fill_words(&mut self, out: &mut [u32]) -> Result<()> {
        if out.is_empty() {
            return Ok(());
        }
        let mut bytes = vec![0u8; out.len() * 4];
        getrandom::fill(&mut bytes)?;
        for (word, chunk) in out.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Clocks
// ---------------------------------------------------------------------------

/// Wall and monotonic clock readings in nanoseconds.
pub trait TimeSource {
    /// Nanoseconds since the Unix epoch. Negative before it.
    fn system_nanos(&self) -> i64;

    /// Nanoseconds on a monotonic clock since an implementation-defined epoch.
    fn steady_nanos(&self) -> i64;
}

/// The host's real clocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClocks;

impl TimeSource for SystemClocks {
    fn system_nanos(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(since) => saturating_nanos(since),
            Err(before) => -saturating_nanos(before.duration()),
        }
    }

    fn steady_nanos(&self) -> i64 {
        monotonic_nanos()
    }
}

/// Monotonic clock in nanoseconds.
///
/// On Unix this reads `CLOCK_MONOTONIC` (counts from boot on Linux).
/// Elsewhere, or if the call fails, it falls back to `Instant` relative to a
/// process-local epoch.
#[cfg(unix)]
pub fn monotonic_nanos() -> i64 {
    // SAFETY: timespec is plain old data; an all-zero value is valid and
    // clock_gettime only writes through the pointer we hand it.
    let mut ts: libc::timespec = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::clock_gettime(libc::CLOCK_MONOTONIC, &mut ts) };
    if rc != 0 {
        return process_nanos();
    }
    (ts.tv_sec as i64)
        .wrapping_mul(1_000_000_000)
        .wrapping_add(ts.tv_nsec as i64)
}

#[cfg(not(unix))]
pub fn monotonic_nanos() -> i64 {
    process_nanos()
}

fn process_nanos() -> i64 {
    use std::sync::OnceLock;
    use std::time::Instant;
    static EPOCH: OnceLock<Instant> = OnceLock::new();
    let epoch = EPOCH.get_or_init(Instant::now);
    saturating_nanos(epoch.elapsed())
}

/// Whole nanoseconds in `d`, pinned to `i64::MAX` past the year 2262.
fn saturating_nanos(d: Duration) -> i64 {
    i64::try_from(d.as_nanos()).unwrap_or(i64::MAX)
}

/// Split a nanosecond count into two words, high bits first.
pub const fn split_nanos(nanos: i64) -> [u32; 2] {
    let bits = nanos as u64;
    [(bits >> 32) as u32, bits as u32]
}
