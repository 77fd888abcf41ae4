//! Platform detection and engine variant selection.

use std::fmt;

/// Which Mersenne Twister the native engine alias resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineVariant {
    /// MT19937, 32-bit output words.
    Mt32,
    /// MT19937-64, 64-bit output words.
    Mt64,
}

impl fmt::Display for EngineVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mt32 => write!(f, "mt19937"),
            Self::Mt64 => write!(f, "mt19937_64"),
        }
    }
}

/// Engine variant picked for this build target, from its pointer width.
#[cfg(target_pointer_width = "64")]
pub const NATIVE_ENGINE: EngineVariant = EngineVariant::Mt64;

#[cfg(not(target_pointer_width = "64"))]
pub const NATIVE_ENGINE: EngineVariant = EngineVariant::Mt32;

/// Native addressable word width in bits.
pub const fn native_word_bits() -> u32 {
    usize::BITS
}

/// Platform information.
pub fn platform_info() -> PlatformInfo {
    PlatformInfo {
        system: std::env::consts::OS.to_string(),
        machine: std::env::consts::ARCH.to_string(),
        family: std::env::consts::FAMILY.to_string(),
        word_bits: native_word_bits(),
        engine: NATIVE_ENGINE,
    }
}

#[derive(Debug, Clone)]
pub struct PlatformInfo {
    pub system: String,
    pub machine: String,
    pub family: String,
    pub word_bits: u32,
    pub engine: EngineVariant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_follows_word_width() {
        let expected = if native_word_bits() >= 64 {
            EngineVariant::Mt64
        } else {
            EngineVariant::Mt32
        };
        assert_eq!(NATIVE_ENGINE, expected);
    }

    #[test]
    fn platform_info_is_filled() {
        let info = platform_info();
        assert!(!info.system.is_empty());
        assert!(!info.machine.is_empty());
        assert_eq!(info.word_bits, usize::BITS);
        assert_eq!(info.engine, NATIVE_ENGINE);
    }

    #[test]
    fn variant_names() {
        assert_eq!(EngineVariant::Mt32.to_string(), "mt19937");
        assert_eq!(EngineVariant::Mt64.to_string(), "mt19937_64");
    }
}
