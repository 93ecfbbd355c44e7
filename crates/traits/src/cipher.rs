//! Raw block-cipher capability consumed by CMAC, GMAC, and GCM.
//!
//! Only single-block encryption under a fixed key is required: no chaining, no
//! padding, no decryption. The cipher internals live outside this workspace.

use crate::Error;

/// Block size in bytes of every cipher usable with rsdigest's MACs.
pub const BLOCK_SIZE: usize = 16;

/// One 128-bit cipher block.
pub type Block = [u8; BLOCK_SIZE];

/// A 128-bit block cipher keyed at construction.
///
/// Implementations should erase their key schedule on drop.
pub trait BlockCipher: Clone {
  /// Cipher name (e.g. `"AES-128"`).
  const NAME: &'static str;

  /// Accepted key lengths in bytes.
  const KEY_SIZES: &'static [usize];

  /// Expand `key` into a cipher instance.
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidKeyLength`] if `key.len()` is not in [`Self::KEY_SIZES`].
  fn new(key: &[u8]) -> Result<Self, Error>;

  /// Encrypt one block in place.
  fn encrypt_block(&self, block: &mut Block);

  /// Whether `len` is an accepted key length.
  #[inline]
  #[must_use]
  fn accepts_key_len(len: usize) -> bool {
    Self::KEY_SIZES.contains(&len)
  }
}
