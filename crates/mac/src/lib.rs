//! Message authentication codes for rsdigest.
//!
//! Every construction here is generic over a contract from the `traits` crate
//! rather than over a concrete primitive: HMAC over any [`Digest`] (or any
//! [`DynDigest`] pair at runtime), CMAC/GMAC/GCM over any 128-bit
//! [`BlockCipher`].
//!
//! | Type | Construction | Reusable |
//! |------|--------------|----------|
//! | [`Hmac`] / [`DynHmac`] | RFC 2104 keyed hash | yes ([`MacReset`]) |
//! | [`Cmac`] | NIST SP 800-38B block-cipher MAC | yes ([`MacReset`]) |
//! | [`Gmac`] | GCM authentication over AAD only | per nonce |
//! | [`Gcm`] | AES-GCM authenticated encryption | per nonce |
//! | [`Poly1305`] | RFC 8439 one-time authenticator | no |
//!
//! Secret-bearing state (keyed digest states, subkeys, `H`, `r`/`s`) is
//! zeroized on drop and on reset.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "aes")]
pub mod aes;
pub mod cmac;
pub mod gcm;
pub mod ghash;
pub mod gmac;
pub mod hmac;
pub mod poly1305;

pub use cmac::Cmac;
pub use gcm::Gcm;
pub use ghash::Ghash;
pub use gmac::Gmac;
#[cfg(feature = "alloc")]
pub use hmac::DynHmac;
pub use hmac::Hmac;
pub use poly1305::Poly1305;
pub use traits::{BlockCipher, Digest, DynDigest, Error, Mac, MacReset, VerificationError};
