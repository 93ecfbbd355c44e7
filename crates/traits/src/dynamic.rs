//! Object-safe digest contract for runtime algorithm selection.
//!
//! [`Digest`] is the static, monomorphized interface. [`DynDigest`] is what the
//! algorithm registry hands out and what dynamic HMAC composes: metadata is
//! queried at runtime, and the finalize-then-reset lifecycle is enforced with
//! [`Error::InvalidState`] instead of the type system.

#[cfg(feature = "alloc")]
use alloc::boxed::Box;

use crate::{Digest, Error};

/// Runtime digest contract.
pub trait DynDigest {
  /// Canonical algorithm name (e.g. `"RIPEMD-160"`).
  fn algorithm_name(&self) -> &'static str;

  /// Compression block size in bytes.
  fn block_size(&self) -> usize;

  /// Output size in bytes.
  fn output_size(&self) -> usize;

  /// Output size in bits.
  #[inline]
  fn output_bits(&self) -> usize {
    self.output_size() * 8
  }

  /// Absorb more input.
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidState`] if the instance was finalized and not reset.
  fn update(&mut self, data: &[u8]) -> Result<(), Error>;

  /// Write the digest into `out`, returning the bytes written.
  ///
  /// The instance rejects further input until [`reset`](Self::reset).
  ///
  /// # Errors
  ///
  /// Returns [`Error::OutputTooSmall`] if `out` cannot hold the digest (the
  /// instance stays usable), or [`Error::InvalidState`] if already finalized.
  fn finalize_into(&mut self, out: &mut [u8]) -> Result<usize, Error>;

  /// Discard all absorbed input and any finalized state.
  fn reset(&mut self);

  /// `reset`, `update(data)`, `finalize_into(out)`.
  ///
  /// # Errors
  ///
  /// Returns [`Error::OutputTooSmall`] if `out` cannot hold the digest.
  #[inline]
  fn compute(&mut self, data: &[u8], out: &mut [u8]) -> Result<usize, Error> {
    self.reset();
    self.update(data)?;
    self.finalize_into(out)
  }

  /// Overwrite all internal state with zeros, then return to the initial state.
  fn wipe(&mut self);

  /// Clone into a new boxed instance carrying the same absorbed state.
  #[cfg(feature = "alloc")]
  fn box_clone(&self) -> Box<dyn DynDigest + Send + Sync>;
}

/// Adapter giving any [`Digest`] the [`DynDigest`] lifecycle.
#[derive(Clone)]
pub struct DigestInstance<D: Digest> {
  digest: D,
  finalized: bool,
}

impl<D: Digest> DigestInstance<D> {
  /// Wrap a fresh hasher.
  #[inline]
  #[must_use]
  pub fn new() -> Self {
    Self { digest: D::new(), finalized: false }
  }

  /// Whether [`DynDigest::finalize_into`] has succeeded since the last reset.
  #[inline]
  #[must_use]
  pub const fn is_finalized(&self) -> bool {
    self.finalized
  }
}

impl<D: Digest> Default for DigestInstance<D> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<D: Digest> Drop for DigestInstance<D> {
  fn drop(&mut self) {
    self.digest.zeroize();
  }
}

impl<D: Digest + Send + Sync + 'static> DynDigest for DigestInstance<D> {
  #[inline]
  fn algorithm_name(&self) -> &'static str {
    D::NAME
  }

  #[inline]
  fn block_size(&self) -> usize {
    D::BLOCK_SIZE
  }

  #[inline]
  fn output_size(&self) -> usize {
    D::OUTPUT_SIZE
  }

  #[inline]
  fn update(&mut self, data: &[u8]) -> Result<(), Error> {
    if self.finalized {
      return Err(Error::InvalidState("update after finalize; call reset first"));
    }
    self.digest.update(data);
    Ok(())
  }

  fn finalize_into(&mut self, out: &mut [u8]) -> Result<usize, Error> {
    if self.finalized {
      return Err(Error::InvalidState("digest already finalized; call reset first"));
    }
    let written = self.digest.finalize_into(out)?;
    self.finalized = true;
    Ok(written)
  }

  #[inline]
  fn reset(&mut self) {
    self.digest.reset();
    self.finalized = false;
  }

  #[inline]
  fn wipe(&mut self) {
    self.digest.zeroize();
    self.reset();
  }

  #[cfg(feature = "alloc")]
  fn box_clone(&self) -> Box<dyn DynDigest + Send + Sync> {
    Box::new(self.clone())
  }
}

#[cfg(test)]
mod tests {
  use super::{DigestInstance, DynDigest};
  use crate::{Digest, Error, Zeroize};

  #[derive(Clone, Default)]
  struct Sum(u32);

  impl Zeroize for Sum {
    fn zeroize(&mut self) {
      self.0 = 0;
    }
  }

  impl Digest for Sum {
    const NAME: &'static str = "SUM";
    const BLOCK_SIZE: usize = 1;
    const OUTPUT_SIZE: usize = 4;
    type Output = [u8; 4];

    fn new() -> Self {
      Self(0)
    }

    fn update(&mut self, data: &[u8]) {
      self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
    }

    fn finalize(&self) -> Self::Output {
      self.0.to_be_bytes()
    }

    fn reset(&mut self) {
      self.0 = 0;
    }
  }

  #[test]
  fn static_finalize_is_a_snapshot() {
    let mut h = Sum::new();
    h.update(&[1, 2]);
    assert_eq!(h.finalize(), [0, 0, 0, 3]);
    h.update(&[4]);
    assert_eq!(h.finalize(), Sum::digest(&[1, 2, 4]));
  }

  #[test]
  fn instance_rejects_input_after_finalize_until_reset() {
    let mut d = DigestInstance::<Sum>::new();
    d.update(&[5]).unwrap();
    let mut out = [0u8; 4];
    assert_eq!(d.finalize_into(&mut out), Ok(4));
    assert!(d.is_finalized());
    assert_eq!(out, [0, 0, 0, 5]);

    assert!(matches!(d.update(&[1]), Err(Error::InvalidState(_))));
    assert!(matches!(d.finalize_into(&mut out), Err(Error::InvalidState(_))));

    d.reset();
    d.update(&[7]).unwrap();
    assert_eq!(d.finalize_into(&mut out), Ok(4));
    assert_eq!(out, [0, 0, 0, 7]);
  }

  #[test]
  fn short_output_leaves_instance_usable() {
    let mut d = DigestInstance::<Sum>::new();
    d.update(&[9]).unwrap();
    assert_eq!(d.finalize_into(&mut [0u8; 3]), Err(Error::OutputTooSmall { required: 4, actual: 3 }));
    assert!(!d.is_finalized());
    d.update(&[1]).unwrap();
    let mut out = [0u8; 4];
    assert_eq!(d.compute(&[2, 3], &mut out), Ok(4));
    assert_eq!(out, [0, 0, 0, 5]);
  }
}
