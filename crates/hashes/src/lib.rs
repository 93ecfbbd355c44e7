//! Streaming cryptographic digests for rsdigest.
//!
//! This crate is `no_std` compatible. Its only library dependencies are the
//! rsdigest `traits` crate and `zeroize`; `tracing` is optional. Dev-only
//! dependencies are used for oracle testing and benchmarking.
//!
//! # Modules
//!
//! - [`buffer`] - Block buffer engine shared by every streaming construction.
//! - [`crypto`] - RIPEMD-160, SHA-2, SHA-3 and SHAKE.
//! - [`registry`] - Algorithm lookup by name (requires `alloc`).
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod buffer;
pub mod crypto;
#[cfg(feature = "alloc")]
pub mod registry;

pub use buffer::BlockBuffer;
pub use traits::{Digest, DynDigest, Error, Xof, XofReader};
