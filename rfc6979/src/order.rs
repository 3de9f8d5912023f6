//! Group order and the RFC6979 integer/octet-string encodings tied to it.
//!
//! See [RFC6979 Section 2.3](https://tools.ietf.org/html/rfc6979#section-2.3).

use crate::{Error, Result};
use alloc::{vec, vec::Vec};
use num_bigint::BigUint;

/// Order `q` of the signing group, along with its bit length `qlen` and the
/// byte-aligned bit length `rlen`.
///
/// A [`FieldOrder`] is immutable once constructed and can be shared freely
/// between any number of nonce derivations, including across threads.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldOrder {
    /// Group order `q`.
    q: BigUint,

    /// Number of significant bits in `q`.
    qlen: usize,

    /// `qlen` rounded up to a multiple of 8.
    rlen: usize,
}

impl FieldOrder {
    /// Create a new [`FieldOrder`] from the group order `q`.
    ///
    /// Returns [`Error::InvalidOrder`] if `q < 2`.
    pub fn new(q: BigUint) -> Result<Self> {
        if q.bits() < 2 {
            return Err(Error::InvalidOrder);
        }

        let qlen = usize::try_from(q.bits()).map_err(|_| Error::InvalidOrder)?;
        let rlen = qlen.div_ceil(8) * 8;

        #[cfg(feature = "tracing")]
        tracing::trace!(qlen, rlen, "initialized field order");

        Ok(Self { q, qlen, rlen })
    }

    /// Create a new [`FieldOrder`] from a big endian encoding of `q`.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        Self::new(BigUint::from_bytes_be(bytes))
    }

    /// Borrow the group order `q`.
    pub fn order(&self) -> &BigUint {
        &self.q
    }

    /// Bit length of `q`.
    pub fn qlen(&self) -> usize {
        self.qlen
    }

    /// Bit length of `q` rounded up to a multiple of 8.
    pub fn rlen(&self) -> usize {
        self.rlen
    }

    /// Width in bytes of every integer encoded with [`FieldOrder::int2octets`].
    pub fn len_bytes(&self) -> usize {
        self.rlen / 8
    }

    /// Subtract `q` from `x` once if `x >= q`.
    ///
    /// This is not a general modular reduction: the result is only reduced
    /// when `x < 2q`, which holds for any output of
    /// [`FieldOrder::bits2int`] since it never exceeds `qlen` bits.
    pub fn reduce_once(&self, x: BigUint) -> BigUint {
        if x >= self.q { x - &self.q } else { x }
    }

    /// Interpret `bits` as a big endian integer, keeping only its `qlen`
    /// leftmost bits.
    ///
    /// Section 2.3.2.
    pub fn bits2int(&self, bits: &[u8]) -> BigUint {
        let x = BigUint::from_bytes_be(bits);
        let blen = bits.len() * 8;

        if blen > self.qlen {
            x >> (blen - self.qlen)
        } else {
            x
        }
    }

    /// Encode `x` as exactly `rlen / 8` big endian bytes, left padded with
    /// zeros.
    ///
    /// `x` must be less than `q`. This is not checked: wider inputs lose their
    /// high-order bytes.
    ///
    /// Section 2.3.3.
    pub fn int2octets(&self, x: &BigUint) -> Vec<u8> {
        let bytes = x.to_bytes_be();
        let mut out = vec![0u8; self.len_bytes()];
        let n = bytes.len().min(out.len());
        let offset = out.len() - n;
        out[offset..].copy_from_slice(&bytes[bytes.len() - n..]);
        out
    }

    /// Convert a message digest into an `rlen / 8` byte encoding of its
    /// reduction modulo `q`.
    ///
    /// Section 2.3.4.
    pub fn bits2octets(&self, bits: &[u8]) -> Vec<u8> {
        let z1 = self.bits2int(bits);
        let z2 = self.reduce_once(z1);
        self.int2octets(&z2)
    }
}
