//! Cryptographic hash functions.

pub mod keccak;
pub mod ripemd160;
pub mod sha256;
pub mod sha3;
pub mod sha512;

pub use ripemd160::Ripemd160;
pub use sha3::{Sha3_256, Sha3_512, Shake128, Shake128Digest, Shake128Reader, Shake256, Shake256Digest, Shake256Reader};
pub use sha256::{Sha224, Sha256};
pub use sha512::{Sha384, Sha512};
