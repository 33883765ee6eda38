//! Boundary errors for the AES-128 core.

use thiserror::Error;

/// Errors raised when caller-supplied data has the wrong length.
///
/// The round functions and key schedule are total; only the conversions from
/// untyped byte slices can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Key material is not exactly 16 bytes.
    #[error("invalid key length `{actual}` bytes, expected `{expected}`")]
    InvalidKeyLength {
        /// Required key length in bytes.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// A block (or the tail of a block buffer) is not exactly 16 bytes.
    #[error("invalid block length `{actual}` bytes, expected `{expected}`")]
    InvalidBlockLength {
        /// Required block length in bytes.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
}

/// Result alias used across the crate.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_both_lengths() {
        let err = Error::InvalidKeyLength {
            expected: 16,
            actual: 15,
        };
        assert_eq!(
            err.to_string(),
            "invalid key length `15` bytes, expected `16`"
        );

        let err = Error::InvalidBlockLength {
            expected: 16,
            actual: 3,
        };
        assert!(err.to_string().contains("`3`"));
    }
}
