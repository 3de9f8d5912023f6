#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Algorithm
//!
//! ```text
//! h1 = H(m), hlen = |h1|
//! V  = 0x01 0x01 ... 0x01   (hlen bytes)
//! K  = 0x00 0x00 ... 0x00   (hlen bytes)
//! K  = HMAC_K(V || 0x00 || int2octets(x) || bits2octets(h1))
//! V  = HMAC_K(V)
//! K  = HMAC_K(V || 0x01 || int2octets(x) || bits2octets(h1))
//! V  = HMAC_K(V)
//! loop:
//!     T = empty
//!     while bitlen(T) < qlen: V = HMAC_K(V); T = T || V
//!     k = bits2int(T)
//!     if 1 <= k < q: return k
//!     K = HMAC_K(V || 0x00)
//!     V = HMAC_K(V)
//! ```

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod drbg;
mod error;
mod nonce;
mod order;

pub use crate::{
    error::{Error, Result},
    order::FieldOrder,
};
pub use digest;
pub use num_bigint::{self, BigUint};

#[cfg(feature = "sha2")]
pub use sha2;
