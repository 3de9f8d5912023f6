use rfc6979_bigint::{BigUint, FieldOrder};
use sha2::{Digest, Sha256};

fn main() -> Result<(), rfc6979_bigint::Error> {
    let order = FieldOrder::new(BigUint::from(31u8))?;
    let private_key = BigUint::from(14u8);
    let message_hash = Sha256::digest(b"this is a message to sign");

    let k = order.nonce::<Sha256>(&private_key, &message_hash)?;
    println!("k: {k}");

    Ok(())
}
