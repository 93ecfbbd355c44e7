//! Streaming digests and message authentication in pure Rust.
//!
//! `rsdigest` re-exports the workspace crates behind one set of feature flags:
//! RIPEMD-160, SHA-2, SHA-3 and SHAKE from `hashes`; HMAC, CMAC, GMAC,
//! Poly1305 and AES-GCM from `mac`. Everything is `no_std` compatible and
//! built on one block buffer engine.
//!
//! # Quick Start
//!
//! ```
//! use rsdigest::{Digest, Hmac, Mac, Ripemd160};
//!
//! // One-shot computation
//! let digest = Ripemd160::digest(b"abc");
//! assert_eq!(digest[..4], [0x8e, 0xb2, 0x08, 0xf7]);
//!
//! // Streaming computation
//! let mut hasher = Ripemd160::new();
//! hasher.update(b"a");
//! hasher.update(b"bc");
//! assert_eq!(hasher.finalize(), digest);
//!
//! // Keyed
//! let tag = Hmac::<Ripemd160>::mac(b"key", b"message");
//! let mut m = Hmac::<Ripemd160>::new(b"key");
//! m.update(b"message");
//! assert!(m.verify(&tag).is_ok());
//! ```
//!
//! Algorithms can also be chosen at runtime by name:
//!
//! ```
//! let mut h = rsdigest::new_digest("sha-256").unwrap();
//! let mut out = [0u8; 32];
//! h.compute(b"abc", &mut out).unwrap();
//! assert_eq!(out[0], 0xba);
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Implies `alloc` |
//! | `alloc` | Yes | Registry, [`DynDigest`] boxes and `DynHmac` |
//! | `hashes` | Yes | RIPEMD-160, SHA-2, SHA-3, SHAKE |
//! | `mac` | Yes | HMAC, CMAC, GMAC/GHASH, Poly1305, GCM |
//! | `aes` | Yes | AES block-cipher adapters for CMAC, GMAC and GCM |
//! | `tracing` | No | Debug events on registry misses and `DynHmac` setup |
//!
//! ## `no_std` Usage
//!
//! ```toml
//! [dependencies]
//! rsdigest = { version = "0.1", default-features = false, features = ["mac"] }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

pub use traits::{BlockCipher, Digest, DynDigest, Error, Mac, MacReset, VerificationError, Xof, XofReader, ct};

// =============================================================================
// Hashes
// =============================================================================

#[cfg(feature = "hashes")]
pub use hashes::{
  BlockBuffer, crypto,
  crypto::{
    Ripemd160, Sha3_256, Sha3_512, Sha224, Sha256, Sha384, Sha512, Shake128, Shake128Digest, Shake128Reader, Shake256,
    Shake256Digest, Shake256Reader,
  },
};
#[cfg(all(feature = "hashes", feature = "alloc"))]
pub use hashes::registry::{self, Algorithm, algorithms, new_digest};

// =============================================================================
// MACs and AEAD
// =============================================================================

#[cfg(feature = "aes")]
pub use mac::aes::{Aes128, Aes192, Aes256};
#[cfg(all(feature = "mac", feature = "alloc"))]
pub use mac::DynHmac;
#[cfg(feature = "mac")]
pub use mac::{Cmac, Gcm, Ghash, Gmac, Hmac, Poly1305};
