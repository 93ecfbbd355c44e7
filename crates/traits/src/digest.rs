//! Cryptographic digest trait.
//!
//! Streaming updates, idempotent finalize, and reset support. Any split of the
//! same input across [`Digest::update`] calls must produce the same output.

use core::fmt::Debug;

use zeroize::Zeroize;

use crate::Error;

/// Cryptographic hash function producing a fixed-size digest.
///
/// This trait is intended for algorithms like RIPEMD-160, SHA-256 and SHA3-256.
/// Implementors must be [`Zeroize`] so keyed compositions (HMAC) can erase
/// key-dependent state.
///
/// # Example
///
/// ```rust
/// # use traits::{Digest, Zeroize};
/// # #[derive(Clone, Default)]
/// # struct SumDigest(u8);
/// # impl Zeroize for SumDigest { fn zeroize(&mut self) { self.0 = 0; } }
/// # impl Digest for SumDigest {
/// #   const NAME: &'static str = "SUM";
/// #   const BLOCK_SIZE: usize = 1;
/// #   const OUTPUT_SIZE: usize = 4;
/// #   type Output = [u8; 4];
/// #   fn new() -> Self { Self(0) }
/// #   fn update(&mut self, data: &[u8]) {
/// #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(b));
/// #   }
/// #   fn finalize(&self) -> Self::Output { [self.0; 4] }
/// #   fn reset(&mut self) { self.0 = 0; }
/// # }
/// let mut h = SumDigest::new();
/// h.update(b"ab");
/// h.update(b"c");
/// assert_eq!(h.finalize(), SumDigest::digest(b"abc"));
///
/// let mut out = [0u8; 3];
/// assert!(h.finalize_into(&mut out).is_err());
/// ```
pub trait Digest: Clone + Default + Zeroize {
  /// Canonical algorithm name, as understood by the registry (e.g. `"SHA-256"`).
  const NAME: &'static str;

  /// Compression block size in bytes (the HMAC padding width).
  const BLOCK_SIZE: usize;

  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// The digest output type.
  ///
  /// Typically `[u8; N]`.
  type Output: Copy + Eq + Debug + AsRef<[u8]>;

  /// Create a new hasher in its initial state.
  #[must_use]
  fn new() -> Self;

  /// Update the hasher with additional data.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the digest.
  ///
  /// This method does not consume or disturb the hasher; the padding is
  /// applied to a copy of the pending state. It is a snapshot: the static API
  /// does not lock the hasher afterwards, and further [`update`](Self::update)
  /// calls keep extending the same message. Wrap the hasher in
  /// [`DigestInstance`](crate::DigestInstance) for the finalize-then-reset
  /// lifecycle, where input after finalize is rejected with
  /// [`Error::InvalidState`] until [`DynDigest::reset`](crate::DynDigest::reset).
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Finalize into a caller-supplied buffer, returning the bytes written.
  ///
  /// # Errors
  ///
  /// Returns [`Error::OutputTooSmall`] if `out` is shorter than
  /// [`Self::OUTPUT_SIZE`]; nothing is written in that case.
  #[inline]
  fn finalize_into(&self, out: &mut [u8]) -> Result<usize, Error> {
    Error::check_output(Self::OUTPUT_SIZE, out)?;
    let digest = self.finalize();
    let bytes = digest.as_ref();
    if let Some(dst) = out.get_mut(..bytes.len()) {
      dst.copy_from_slice(bytes);
    }
    Ok(bytes.len())
  }

  /// Reset the hasher to its initial state.
  fn reset(&mut self);

  /// Output size in bits.
  #[inline]
  #[must_use]
  fn output_bits() -> usize {
    Self::OUTPUT_SIZE * 8
  }

  /// Compute the digest of data in one shot.
  #[inline]
  #[must_use]
  fn digest(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the digest of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn digest_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }
}
