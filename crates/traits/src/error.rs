//! Error types for cryptographic operations.
//!
//! Two families, kept deliberately separate:
//!
//! - [`Error`] reports contract violations: bad key/nonce lengths, unknown
//!   algorithm names, undersized output buffers, and state violations such as
//!   absorbing into an XOF that has started squeezing.
//! - [`VerificationError`] reports a failed tag comparison and nothing else.
//!
//! Neither type carries secret material.

use core::fmt;

/// Verification failed.
///
/// Returned when cryptographic verification fails (MAC tags, AEAD tags).
/// Intentionally opaque to prevent timing side-channels.
///
/// # Examples
///
/// ```
/// use traits::{VerificationError, ct};
///
/// fn verify(computed: &[u8; 16], expected: &[u8]) -> Result<(), VerificationError> {
///   ct::verify_tag(computed, expected)
/// }
///
/// let a = [0u8; 16];
/// let b = [1u8; 16];
/// assert!(verify(&a, &b).is_err());
/// assert!(verify(&a, &a).is_ok());
/// ```
///
/// # Security
///
/// This error provides no details about the failure. It is only produced after
/// a full constant-time comparison of the entire tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct VerificationError;

impl VerificationError {
  /// Create a new verification error.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for VerificationError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for VerificationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("verification failed")
  }
}

impl core::error::Error for VerificationError {}

/// Error type for digest, MAC, and AEAD operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
  /// Key length is not accepted by the construction or its block cipher.
  InvalidKeyLength {
    /// Length the caller supplied.
    actual: usize,
  },

  /// Nonce/IV length is not accepted (e.g. an empty GMAC nonce).
  InvalidNonceLength {
    /// Length the caller supplied.
    actual: usize,
  },

  /// The algorithm registry does not know the requested name.
  UnknownAlgorithm,

  /// Inner and outer digests of a composed construction disagree on block size.
  BlockSizeMismatch {
    /// Block size of the inner digest.
    inner: usize,
    /// Block size of the outer digest.
    outer: usize,
  },

  /// Inner and outer digests of a composed construction are different algorithms.
  AlgorithmMismatch,

  /// The caller's output buffer cannot hold the result.
  OutputTooSmall {
    /// Bytes the algorithm produces.
    required: usize,
    /// Bytes the caller provided.
    actual: usize,
  },

  /// The operation is not valid in the instance's current state.
  InvalidState(&'static str),

  /// Tag verification failed.
  Verification,
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidKeyLength { actual } => write!(f, "invalid key length: {actual} bytes"),
      Self::InvalidNonceLength { actual } => write!(f, "invalid nonce length: {actual} bytes"),
      Self::UnknownAlgorithm => f.write_str("unknown algorithm"),
      Self::BlockSizeMismatch { inner, outer } => {
        write!(f, "block size mismatch: inner {inner} bytes, outer {outer} bytes")
      }
      Self::AlgorithmMismatch => f.write_str("inner and outer digests use different algorithms"),
      Self::OutputTooSmall { required, actual } => {
        write!(f, "output buffer too small: need {required} bytes, got {actual}")
      }
      Self::InvalidState(msg) => write!(f, "invalid state: {msg}"),
      Self::Verification => f.write_str("verification failed"),
    }
  }
}

impl core::error::Error for Error {}

impl From<VerificationError> for Error {
  #[inline]
  fn from(_: VerificationError) -> Self {
    Self::Verification
  }
}

impl Error {
  /// Check that `out` can hold `required` bytes.
  ///
  /// # Errors
  ///
  /// Returns [`Error::OutputTooSmall`] when it cannot.
  #[inline]
  pub const fn check_output(required: usize, out: &[u8]) -> Result<(), Self> {
    if out.len() < required {
      Err(Self::OutputTooSmall { required, actual: out.len() })
    } else {
      Ok(())
    }
  }

  /// Whether this error reports a contract violation by the caller's inputs.
  #[inline]
  #[must_use]
  pub const fn is_input_validation(&self) -> bool {
    matches!(
      self,
      Self::InvalidKeyLength { .. }
        | Self::InvalidNonceLength { .. }
        | Self::UnknownAlgorithm
        | Self::BlockSizeMismatch { .. }
        | Self::AlgorithmMismatch
        | Self::OutputTooSmall { .. }
    )
  }
}
