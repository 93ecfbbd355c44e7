//! Core cryptographic contracts for rsdigest.
//!
//! This crate provides the traits that every rsdigest algorithm conforms to.
//! It is `no_std` compatible; its only dependencies are `zeroize` (secret
//! erasure) and `subtle` (constant-time comparison).
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Digest`] | Fixed-output cryptographic hashes | RIPEMD-160, SHA-256, SHA3-256 |
//! | [`Xof`] | Extendable-output absorb/squeeze contract | SHAKE128, SHAKE256 |
//! | [`XofReader`] | Detached squeeze-only output stream | `Shake128Reader` |
//! | [`Mac`] / [`MacReset`] | Keyed message authentication | HMAC, CMAC, GMAC, Poly1305 |
//! | [`BlockCipher`] | Raw single-block encryption consumed by CMAC/GMAC | AES-128/192/256 |
//! | [`DynDigest`] | Object-safe runtime digest contract | registry instances, dynamic HMAC |
//!
//! # Error Types
//!
//! - [`Error`] - Input-validation and state-violation failures
//! - [`VerificationError`] - Opaque error for MAC/AEAD tag verification
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod cipher;
pub mod ct;
mod digest;
pub mod dynamic;
pub mod error;
mod mac;
mod xof;

pub use cipher::{BLOCK_SIZE, Block, BlockCipher};
pub use digest::Digest;
pub use dynamic::{DigestInstance, DynDigest};
pub use error::{Error, VerificationError};
pub use mac::{Mac, MacReset};
pub use xof::{Xof, XofReader};
pub use zeroize::Zeroize;
