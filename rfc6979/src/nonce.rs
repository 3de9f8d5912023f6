//! Deterministic generation of `k` (RFC6979 Section 3.2).

use crate::{Error, FieldOrder, Result, drbg::HmacDrbg};
use digest::{Digest, core_api::BlockSizeUser};
use num_bigint::BigUint;
use zeroize::Zeroizing;

impl FieldOrder {
    /// Deterministically derive the nonce `k` in `[1, q-1]` used to sign the
    /// message digest `h1` with `private_key`.
    ///
    /// `D` is the hash function which produced `h1`: it keys the
    /// `HMAC_DRBG`, so `h1` must be exactly `D`'s output size.
    ///
    /// # Errors
    ///
    /// - [`Error::HashSizeMismatch`] if `h1` is not the size of a `D` digest.
    /// - [`Error::PrivateKeyOutOfRange`] if `private_key >= q`.
    pub fn nonce<D>(&self, private_key: &BigUint, h1: &[u8]) -> Result<BigUint>
    where
        D: Digest + BlockSizeUser,
    {
        self.nonce_with_data::<D>(private_key, h1, &[])
    }

    /// Derive `k` with additional data mixed into the `HMAC_DRBG` seed, as
    /// described in RFC6979 Section 3.6.
    ///
    /// The result is still deterministic for fixed inputs. With empty
    /// `additional_data` it is identical to [`FieldOrder::nonce`].
    pub fn nonce_with_data<D>(
        &self,
        private_key: &BigUint,
        h1: &[u8],
        additional_data: &[u8],
    ) -> Result<BigUint>
    where
        D: Digest + BlockSizeUser,
    {
        let hlen = <D as Digest>::output_size();
        if h1.len() != hlen {
            return Err(Error::HashSizeMismatch {
                expected: hlen,
                actual: h1.len(),
            });
        }

        if private_key >= self.order() {
            return Err(Error::PrivateKeyOutOfRange);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(qlen = self.qlen(), hlen, "deriving nonce");

        // int2octets(x) || bits2octets(h1)
        let mut seed = Zeroizing::new(self.int2octets(private_key));
        seed.extend_from_slice(&self.bits2octets(h1));

        let mut drbg = HmacDrbg::<D>::new(&seed, additional_data);

        #[cfg(feature = "tracing")]
        let mut reseeds = 0u32;

        // Each candidate is rejected with probability at most
        // (2^qlen - q + 1) / 2^qlen. There is no iteration cap.
        loop {
            let t = drbg.fill(self.qlen());
            let k = self.bits2int(&t);

            if k.bits() > 0 && &k < self.order() {
                return Ok(k);
            }

            #[cfg(feature = "tracing")]
            {
                reseeds = reseeds.saturating_add(1);
                tracing::trace!(reseeds, "nonce candidate out of range, reseeding");
            }

            drbg.reseed();
        }
    }

    /// Hash `msg` with `D` and derive `k` for the resulting digest.
    pub fn nonce_for_message<D>(&self, private_key: &BigUint, msg: &[u8]) -> Result<BigUint>
    where
        D: Digest + BlockSizeUser,
    {
        let h1 = D::digest(msg);
        self.nonce::<D>(private_key, &h1)
    }
}
