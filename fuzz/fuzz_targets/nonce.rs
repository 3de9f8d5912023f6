#![no_main]
// Input layout: len || q[len] || x[len] || h1[32], with len in 1..=66
use libfuzzer_sys::fuzz_target;
use rfc6979_bigint::{BigUint, Error, FieldOrder};
use sha2::Sha256;

fuzz_target!(|data: &[u8]| {
    let Some((&len, rest)) = data.split_first() else {
        return;
    };

    let len = usize::from(len % 66) + 1;
    if rest.len() < 2 * len + 32 {
        return;
    }

    let (q, rest) = rest.split_at(len);
    let (x, rest) = rest.split_at(len);
    let h1 = &rest[..32];

    let order = match FieldOrder::from_be_bytes(q) {
        Ok(order) => order,
        Err(Error::InvalidOrder) => {
            assert!(BigUint::from_bytes_be(q) < BigUint::from(2u8));
            return;
        }
        Err(e) => panic!("unexpected error: {e}"),
    };

    let x = BigUint::from_bytes_be(x);
    match order.nonce::<Sha256>(&x, h1) {
        Ok(k) => {
            assert!(k >= BigUint::from(1u8));
            assert!(&k < order.order());
            assert_eq!(order.nonce::<Sha256>(&x, h1).ok(), Some(k));
        }
        Err(Error::PrivateKeyOutOfRange) => assert!(&x >= order.order()),
        Err(e) => panic!("unexpected error: {e}"),
    }
});
