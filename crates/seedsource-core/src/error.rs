//! Error types for seed generation.
//!
//! The only failures are genuine faults of an entropy source. Odd flag words,
//! degenerate source sets and empty output buffers are all accepted.

use thiserror::Error;

/// Faults raised while drawing seed material.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    /// The OS entropy device could not be read
    #[error("OS entropy source failed: {0}")]
    Os(getrandom::Error),

    /// Any other entropy source reported a fault
    #[error("entropy source `{source_name}` failed: {reason}")]
    Device {
        /// Name from the source's metadata
        source_name: &'static str,
        /// Human-readable cause
        reason: String,
    },
}

impl From<getrandom::Error> for SeedError {
    fn from(err: getrandom::Error) -> Self {
        Self::Os(err)
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_error_message() {
        let err = SeedError::Device {
            source_name: "mock",
            reason: "unplugged".to_string(),
        };
        assert_eq!(err.to_string(), "entropy source `mock` failed: unplugged");
    }

    #[test]
    fn os_error_converts() {
        let err: SeedError = getrandom::Error::UNSUPPORTED.into();
        assert!(matches!(err, SeedError::Os(_)));
        assert!(err.to_string().starts_with("OS entropy source failed"));
    }
}
