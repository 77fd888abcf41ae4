//! # seedsource-core
//!
//! **Seeds that don't repeat from one run to the next.**
//!
//! `seedsource-core` produces seed material for pseudo-random engines by
//! combining the OS entropy device, the wall clock and the monotonic clock
//! into a seed sequence: an object that fills a buffer of any length with
//! 32-bit seed words.
//!
//! ## Quick Start
//!
//! ```no_run
//! use rand::Rng;
//! use seedsource_core::{FromSeedSequence, MtEngine, SourceFlags, SourceSeq};
//!
//! // Every source (the default).
//! let mut mt = seedsource_core::make_mt_engine().unwrap();
//! println!("{}", mt.random::<f64>());
//!
//! // Clocks only.
//! let seq = SourceSeq::new(SourceFlags::SYSTEM_CLOCK | SourceFlags::STEADY_CLOCK);
//! let mut mt = MtEngine::from_seed_seq(&seq).unwrap();
//! println!("{}", mt.random_range(1..=6));
//! ```
//!
//! ## Architecture
//!
//! Flags → SourceSeq (device / clocks → SeedSeq diffusion → device XOR) → Engine
//!
//! Not a source of cryptographic keys. The goal is practical non-repeatability
//! across process runs, nothing more.

pub mod conditioning;
pub mod engine;
pub mod error;
pub mod flags;
pub mod platform;
pub mod sequence;
pub mod source;

pub use conditioning::{SeedSeq, xor_words};
pub use engine::{
    FromSeedSequence, MtEngine, MtEngine32, MtEngine64, make_mt_engine, make_mt_engine_with,
    seed_rng,
};
pub use error::{Result, SeedError};
pub use flags::SourceFlags;
pub use platform::{EngineVariant, NATIVE_ENGINE, PlatformInfo, native_word_bits, platform_info};
pub use sequence::{SeedSequence, SourceSeq};
pub use source::{EntropySource, OsEntropy, SourceInfo, SystemClocks, TimeSource, split_nanos};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
