//! Extendable-output function (XOF) traits.

use crate::Error;

/// Extendable-output function with an absorb/squeeze lifecycle.
///
/// - [`absorb`](Self::absorb) may be called any number of times while the
///   instance is absorbing.
/// - The first [`squeeze`](Self::squeeze) finalizes absorption permanently.
///   Later `absorb` calls fail with [`Error::InvalidState`].
/// - Further `squeeze` calls continue the same output stream, so squeezing
///   `a` then `b` bytes equals squeezing `a + b` bytes at once.
/// - [`reset`](Self::reset) returns to a fresh absorbing state.
///
/// This trait has no `std::io::Read` dependency; it is usable in `no_std`
/// environments.
pub trait Xof: Clone + Default {
  /// Canonical algorithm name (e.g. `"SHAKE128"`).
  const NAME: &'static str;

  /// Sponge rate in bytes.
  const BLOCK_SIZE: usize;

  /// Absorb more input.
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidState`] once squeezing has begun.
  fn absorb(&mut self, data: &[u8]) -> Result<(), Error>;

  /// Write the next `out.len()` output bytes, finalizing absorption on the first call.
  fn squeeze(&mut self, out: &mut [u8]);

  /// Whether squeezing has begun.
  #[must_use]
  fn is_squeezing(&self) -> bool;

  /// Return to a fresh absorbing state.
  fn reset(&mut self);

  /// Absorb `data` and squeeze `out.len()` bytes in one shot.
  #[inline]
  fn hash_into(data: &[u8], out: &mut [u8]) {
    let mut x = Self::default();
    // A fresh instance is always absorbing.
    if x.absorb(data).is_ok() {
      x.squeeze(out);
    }
  }
}

/// Detached output stream of a finalized XOF.
pub trait XofReader: Clone {
  /// Squeeze output bytes into `out`.
  fn squeeze(&mut self, out: &mut [u8]);
}
