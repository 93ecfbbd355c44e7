//! Message authentication code traits.
//!
//! Keyed constructors are inherent on each type because key and nonce shapes
//! differ (HMAC takes any key, CMAC a block-cipher key, GMAC a key plus nonce,
//! Poly1305 exactly 32 bytes).

use core::fmt::Debug;

use crate::{Error, VerificationError, ct};

/// Keyed message authentication code.
///
/// `finalize` consumes the instance, so a one-time MAC (Poly1305, GMAC) cannot
/// be finalized twice or absorb after producing its tag. Reusable MACs also
/// implement [`MacReset`].
pub trait Mac: Sized {
  /// Tag size in bytes.
  const TAG_SIZE: usize;

  /// The tag type, typically `[u8; N]`.
  type Tag: Copy + Eq + Debug + AsRef<[u8]>;

  /// Absorb message bytes.
  fn update(&mut self, data: &[u8]);

  /// Absorb multiple non-contiguous buffers.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Produce the tag.
  #[must_use]
  fn finalize(self) -> Self::Tag;

  /// Produce the tag into a caller-supplied buffer, returning the bytes written.
  ///
  /// # Errors
  ///
  /// Returns [`Error::OutputTooSmall`] if `out` is shorter than [`Self::TAG_SIZE`].
  #[inline]
  fn finalize_into(self, out: &mut [u8]) -> Result<usize, Error> {
    Error::check_output(Self::TAG_SIZE, out)?;
    let tag = self.finalize();
    let bytes = tag.as_ref();
    if let Some(dst) = out.get_mut(..bytes.len()) {
      dst.copy_from_slice(bytes);
    }
    Ok(bytes.len())
  }

  /// Produce the tag and compare it against `expected` in constant time.
  ///
  /// # Errors
  ///
  /// Returns [`VerificationError`] if the tags differ in any byte or in length.
  #[inline]
  fn verify(self, expected: &[u8]) -> Result<(), VerificationError> {
    let tag = self.finalize();
    ct::verify_tag(tag.as_ref(), expected)
  }
}

/// A MAC whose key material may be safely reused across messages.
pub trait MacReset: Mac {
  /// Discard any absorbed input, keeping the key.
  fn reset(&mut self);

  /// Produce the tag, then reset for the next message.
  #[must_use]
  fn finalize_reset(&mut self) -> Self::Tag;
}
