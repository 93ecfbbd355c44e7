//! HMAC (RFC 2104) over any digest.
//!
//! The processed key `K'` is the raw key zero-padded to the digest's block
//! size, or the digest of the raw key (zero-padded) when the key is longer than
//! a block. `K' ^ ipad` and `K' ^ opad` are absorbed once at construction and
//! the two keyed states are kept; [`reset`](MacReset::reset) restarts from the
//! keyed inner state without touching the key again.
//!
//! [`Hmac<D>`] is the static form. [`DynHmac`] composes two runtime
//! [`DynDigest`] instances, typically chosen by algorithm name.

#![allow(clippy::indexing_slicing)] // Key block slices are bounded by the asserted block size

#[cfg(feature = "alloc")]
use alloc::{boxed::Box, vec};

#[cfg(feature = "alloc")]
use traits::{DynDigest, Error, ct};
use traits::{Digest, Mac, MacReset};
use zeroize::Zeroize;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Largest digest block the static construction can key (the Keccak state width).
pub const MAX_BLOCK_SIZE: usize = 200;

/// HMAC keyed with a fixed digest type.
#[derive(Clone)]
pub struct Hmac<D: Digest> {
  inner: D,
  inner_keyed: D,
  outer_keyed: D,
}

impl<D: Digest> Hmac<D> {
  /// Key a new instance.
  ///
  /// Any key length is accepted, including empty (RFC 2104 only recommends a
  /// minimum of the digest's output length).
  #[must_use]
  pub fn new(key: &[u8]) -> Self {
    const { assert!(D::BLOCK_SIZE <= MAX_BLOCK_SIZE) };

    let mut block = [0u8; MAX_BLOCK_SIZE];
    let padded = &mut block[..D::BLOCK_SIZE];
    if key.len() > D::BLOCK_SIZE {
      let hashed = D::digest(key);
      let hashed = hashed.as_ref();
      let n = core::cmp::min(hashed.len(), padded.len());
      padded[..n].copy_from_slice(&hashed[..n]);
    } else {
      padded[..key.len()].copy_from_slice(key);
    }

    for b in padded.iter_mut() {
      *b ^= IPAD;
    }
    let mut inner_keyed = D::new();
    inner_keyed.update(padded);

    for b in padded.iter_mut() {
      *b ^= IPAD ^ OPAD;
    }
    let mut outer_keyed = D::new();
    outer_keyed.update(padded);

    block.zeroize();
    Self { inner: inner_keyed.clone(), inner_keyed, outer_keyed }
  }

  /// One-shot tag of `data` under `key`.
  #[must_use]
  pub fn mac(key: &[u8], data: &[u8]) -> D::Output {
    let mut h = Self::new(key);
    h.update(data);
    h.finalize()
  }

  fn tag(&self) -> D::Output {
    let inner = self.inner.finalize();
    let mut outer = self.outer_keyed.clone();
    outer.update(inner.as_ref());
    let tag = outer.finalize();
    outer.zeroize();
    tag
  }
}

impl<D: Digest> Mac for Hmac<D> {
  const TAG_SIZE: usize = D::OUTPUT_SIZE;
  type Tag = D::Output;

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.inner.update(data);
  }

  #[inline]
  fn finalize(self) -> Self::Tag {
    self.tag()
  }
}

impl<D: Digest> MacReset for Hmac<D> {
  fn reset(&mut self) {
    self.inner.zeroize();
    self.inner = self.inner_keyed.clone();
  }

  fn finalize_reset(&mut self) -> Self::Tag {
    let tag = self.tag();
    self.reset();
    tag
  }
}

impl<D: Digest> Drop for Hmac<D> {
  fn drop(&mut self) {
    self.inner.zeroize();
    self.inner_keyed.zeroize();
    self.outer_keyed.zeroize();
  }
}

#[cfg(feature = "alloc")]
type BoxedDigest = Box<dyn DynDigest + Send + Sync>;

/// HMAC over runtime-selected digests.
///
/// Unlike [`Hmac`], finalizing does not consume the instance: a second
/// `finalize_into` or an `update` after finalizing fails with
/// [`Error::InvalidState`] until [`reset`](Self::reset).
#[cfg(feature = "alloc")]
pub struct DynHmac {
  inner: BoxedDigest,
  inner_keyed: BoxedDigest,
  outer_keyed: BoxedDigest,
  finalized: bool,
}

#[cfg(feature = "alloc")]
impl DynHmac {
  /// Key an HMAC over the registry algorithm `name` (e.g. `"SHA-256"`).
  ///
  /// # Errors
  ///
  /// Returns [`Error::UnknownAlgorithm`] if the registry does not know `name`.
  pub fn new(name: &str, key: &[u8]) -> Result<Self, Error> {
    let inner = hashes::registry::new_digest(name)?;
    let outer = inner.box_clone();
    Self::from_digests(inner, outer, key)
  }

  /// Key an HMAC over two caller-supplied digest instances.
  ///
  /// Both instances are reset before use.
  ///
  /// # Errors
  ///
  /// Returns [`Error::BlockSizeMismatch`] if the digests disagree on block
  /// size, or [`Error::AlgorithmMismatch`] if they are different algorithms.
  pub fn from_digests(mut inner: BoxedDigest, mut outer: BoxedDigest, key: &[u8]) -> Result<Self, Error> {
    let block_size = inner.block_size();
    if block_size != outer.block_size() {
      return Err(Error::BlockSizeMismatch { inner: block_size, outer: outer.block_size() });
    }
    if inner.algorithm_name() != outer.algorithm_name() {
      return Err(Error::AlgorithmMismatch);
    }

    let mut padded = vec![0u8; block_size];
    if key.len() > block_size {
      let mut hashed = vec![0u8; inner.output_size()];
      inner.compute(key, &mut hashed)?;
      let n = core::cmp::min(hashed.len(), block_size);
      padded[..n].copy_from_slice(&hashed[..n]);
      hashed.zeroize();
    } else {
      padded[..key.len()].copy_from_slice(key);
    }

    inner.reset();
    outer.reset();

    for b in padded.iter_mut() {
      *b ^= IPAD;
    }
    inner.update(&padded)?;

    for b in padded.iter_mut() {
      *b ^= IPAD ^ OPAD;
    }
    outer.update(&padded)?;
    padded.zeroize();

    #[cfg(feature = "tracing")]
    tracing::debug!(algorithm = inner.algorithm_name(), block_size, "keyed dynamic HMAC");

    Ok(Self { inner_keyed: inner.box_clone(), inner, outer_keyed: outer, finalized: false })
  }

  /// Name of the underlying digest.
  #[inline]
  #[must_use]
  pub fn algorithm_name(&self) -> &'static str {
    self.inner.algorithm_name()
  }

  /// Block size of the underlying digest in bytes.
  #[inline]
  #[must_use]
  pub fn block_size(&self) -> usize {
    self.inner.block_size()
  }

  /// Tag size in bytes.
  #[inline]
  #[must_use]
  pub fn output_size(&self) -> usize {
    self.outer_keyed.output_size()
  }

  /// Absorb message bytes.
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidState`] after finalize until [`reset`](Self::reset).
  pub fn update(&mut self, data: &[u8]) -> Result<(), Error> {
    if self.finalized {
      return Err(Error::InvalidState("update after finalize; call reset first"));
    }
    self.inner.update(data)
  }

  /// Write the tag into `out`, returning the bytes written.
  ///
  /// # Errors
  ///
  /// Returns [`Error::OutputTooSmall`] if `out` cannot hold the tag (the
  /// instance stays usable), or [`Error::InvalidState`] if already finalized.
  pub fn finalize_into(&mut self, out: &mut [u8]) -> Result<usize, Error> {
    if self.finalized {
      return Err(Error::InvalidState("HMAC already finalized; call reset first"));
    }
    Error::check_output(self.output_size(), out)?;

    let mut inner_result = vec![0u8; self.inner.output_size()];
    self.inner.finalize_into(&mut inner_result)?;
    self.finalized = true;

    let mut outer = self.outer_keyed.box_clone();
    let written = outer.update(&inner_result).and_then(|()| outer.finalize_into(out));
    inner_result.zeroize();
    outer.wipe();
    written
  }

  /// `reset`, `update(data)`, `finalize_into(out)`.
  ///
  /// # Errors
  ///
  /// Returns [`Error::OutputTooSmall`] if `out` cannot hold the tag.
  pub fn compute(&mut self, data: &[u8], out: &mut [u8]) -> Result<usize, Error> {
    self.reset();
    self.update(data)?;
    self.finalize_into(out)
  }

  /// Finalize and compare against `expected` in constant time.
  ///
  /// # Errors
  ///
  /// Returns [`Error::Verification`] on mismatch, or the errors of
  /// [`finalize_into`](Self::finalize_into).
  pub fn verify(&mut self, expected: &[u8]) -> Result<(), Error> {
    let mut tag = vec![0u8; self.output_size()];
    let result = self.finalize_into(&mut tag).and_then(|_| ct::verify_tag(&tag, expected).map_err(Error::from));
    tag.zeroize();
    result
  }

  /// Discard absorbed input, keeping the key.
  pub fn reset(&mut self) {
    self.inner.wipe();
    self.inner = self.inner_keyed.box_clone();
    self.finalized = false;
  }
}

#[cfg(feature = "alloc")]
impl Drop for DynHmac {
  fn drop(&mut self) {
    self.inner.wipe();
    self.inner_keyed.wipe();
    self.outer_keyed.wipe();
  }
}
