//! Seed material conditioning.
//!
//! All diffusion of gathered seed words lives here. Sources produce raw
//! words; this module turns a small pool of them into an arbitrary number of
//! well-mixed output words.
//!
//! # Algorithm
//!
//! [`SeedSeq`] implements the classic seed-sequence construction standardised
//! for `seed_seq`: the output buffer is filled with `0x8b8b8b8b`, then two
//! passes walk it with a lag derived from its length. The first pass folds
//! each pool word in (multiplier `1664525`), the second re-diffuses every
//! position (multiplier `1566083941`). Output is bit-exact with other
//! conforming implementations, so a pool can be reproduced anywhere.
//!
//! An empty pool is allowed and yields a fixed, reproducible sequence.

use crate::error::Result;
use crate::sequence::SeedSequence;

const FILL: u32 = 0x8b8b_8b8b;
const MULT_MIX: u32 = 1_664_525;
const MULT_FINAL: u32 = 1_566_083_941;

/// Classic seed-sequence diffusion over a pool of 32-bit words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSeq {
    pool: Vec<u32>,
}

impl SeedSeq {
    /// Create a mixer over the given seed words.
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        Self {
            pool: words.into_iter().collect(),
        }
    }

    /// Diffuse the pool across `out`. Any length is accepted, including 0.
    pub fn mix_into(&self, out: &mut [u32]) {
        let n = out.len();
        if n == 0 {
            return;
        }
        out.fill(FILL);

        let s = self.pool.len();
        let t = lag(n);
        let p = (n - t) / 2;
        let q = p + t;
        let m = (s + 1).max(n);

        for k in 0..m {
            let r1 = MULT_MIX.wrapping_mul(tangle(
                out[k % n] ^ out[(k + p) % n] ^ out[(k + n - 1) % n],
            ));
            let r2 = if k == 0 {
                r1.wrapping_add(s as u32)
            } else if k <= s {
                r1.wrapping_add((k % n) as u32)
                    .wrapping_add(self.pool[k - 1])
            } else {
                r1.wrapping_add((k % n) as u32)
            };
            out[(k + p) % n] = out[(k + p) % n].wrapping_add(r1);
            out[(k + q) % n] = out[(k + q) % n].wrapping_add(r2);
            out[k % n] = r2;
        }

        for k in m..m + n {
            let r3 = MULT_FINAL.wrapping_mul(tangle(
                out[k % n]
                    .wrapping_add(out[(k + p) % n])
                    .wrapping_add(out[(k + n - 1) % n]),
            ));
            let r4 = r3.wrapping_sub((k % n) as u32);
            out[(k + p) % n] ^= r3;
            out[(k + q) % n] ^= r4;
            out[k % n] = r4;
        }
    }
}

impl SeedSequence for SeedSeq {
    fn generate(&self, out: &mut [u32]) -> Result<()> {
        self.mix_into(out);
        Ok(())
    }

    fn size(&self) -> usize {
        self.pool.len()
    }

    fn param<E: Extend<u32>>(&self, sink: &mut E) {
        sink.extend(self.pool.iter().copied());
    }
}

/// Lag between the positions touched on each step.
fn lag(n: usize) -> usize {
    match n {
        623.. => 11,
        68.. => 7,
        39.. => 5,
        7.. => 3,
        _ => (n - 1) / 2,
    }
}

fn tangle(x: u32) -> u32 {
    x ^ (x >> 27)
}

/// XOR `src` into `dst` position by position.
///
/// Only the overlapping prefix is combined.
pub fn xor_words(dst: &mut [u32], src: &[u32]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= s;
    }
}
