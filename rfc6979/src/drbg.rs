//! `HMAC_DRBG` state as specialized by RFC6979 Section 3.2.

use alloc::{vec, vec::Vec};
use core::marker::PhantomData;
use digest::{Digest, core_api::BlockSizeUser};
use hmac::{Mac, SimpleHmac};
use zeroize::Zeroizing;

/// Internal implementation of the `HMAC_DRBG` described in NIST SP800-90A,
/// restricted to what RFC6979 needs to derive `k`.
///
/// <https://csrc.nist.gov/publications/detail/sp/800-90a/rev-1/final>
pub(crate) struct HmacDrbg<D>
where
    D: Digest + BlockSizeUser,
{
    /// HMAC key `K` (see RFC6979 Section 3.2.c)
    k: Zeroizing<Vec<u8>>,

    /// Chaining value `V` (see RFC6979 Section 3.2.b)
    v: Zeroizing<Vec<u8>>,

    _digest: PhantomData<D>,
}

impl<D> HmacDrbg<D>
where
    D: Digest + BlockSizeUser,
{
    /// Initialize `HMAC_DRBG` from the concatenation of `seed` and
    /// `additional_data` (steps 3.2.b through 3.2.g).
    pub fn new(seed: &[u8], additional_data: &[u8]) -> Self {
        let hlen = <D as Digest>::output_size();
        let mut drbg = Self {
            k: Zeroizing::new(vec![0x00; hlen]),
            v: Zeroizing::new(vec![0x01; hlen]),
            _digest: PhantomData,
        };

        for i in 0..=1u8 {
            // K = HMAC_K(V || i || seed || additional_data)
            drbg.k = compute_hmac::<D>(
                &drbg.k,
                &[drbg.v.as_slice(), &[i], seed, additional_data],
            );

            // V = HMAC_K(V)
            drbg.v = compute_hmac::<D>(&drbg.k, &[drbg.v.as_slice()]);
        }

        drbg
    }

    /// Produce at least `qlen` bits of output by chaining `V = HMAC_K(V)`
    /// (step 3.2.h.2).
    pub fn fill(&mut self, qlen: usize) -> Zeroizing<Vec<u8>> {
        let mut t = Zeroizing::new(Vec::new());

        while t.len() * 8 < qlen {
            self.v = compute_hmac::<D>(&self.k, &[self.v.as_slice()]);
            t.extend_from_slice(&self.v);
        }

        t
    }

    /// Update `K` and `V` after a rejected candidate, without new input
    /// (step 3.2.h.3).
    pub fn reseed(&mut self) {
        self.k = compute_hmac::<D>(&self.k, &[self.v.as_slice(), &[0x00]]);
        self.v = compute_hmac::<D>(&self.k, &[self.v.as_slice()]);
    }
}

/// Compute `HMAC_key(parts[0] || parts[1] || ...)`.
fn compute_hmac<D>(key: &[u8], parts: &[&[u8]]) -> Zeroizing<Vec<u8>>
where
    D: Digest + BlockSizeUser,
{
    let mut mac = <SimpleHmac<D> as Mac>::new_from_slice(key)
        .expect("HMAC accepts keys of any length");

    for part in parts {
        Mac::update(&mut mac, part);
    }

    Zeroizing::new(mac.finalize().into_bytes().to_vec())
}
