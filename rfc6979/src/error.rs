//! Error types.

use core::fmt;

/// Result type with the `rfc6979-bigint` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors which occur when deriving a nonce.
///
/// All of these are caller errors: retrying with the same inputs yields the
/// same error.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The group order is degenerate (`q < 2`), so no nonce in `[1, q-1]`
    /// exists.
    InvalidOrder,

    /// The message digest length does not match the output size of the hash
    /// function used for nonce derivation.
    ///
    /// This means the message was hashed with a different function than the
    /// one passed in for deriving the nonce.
    HashSizeMismatch {
        /// Output size of the hash function, in bytes.
        expected: usize,

        /// Length of the supplied digest, in bytes.
        actual: usize,
    },

    /// The private key is not strictly less than the group order.
    PrivateKeyOutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidOrder => f.write_str("group order must be at least 2"),
            Error::HashSizeMismatch { expected, actual } => write!(
                f,
                "digest is {actual} bytes but the hash function outputs {expected} bytes"
            ),
            Error::PrivateKeyOutOfRange => {
                f.write_str("private key is not less than the group order")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
