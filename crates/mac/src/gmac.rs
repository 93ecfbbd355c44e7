//! GMAC: GCM authentication over associated data only (NIST SP 800-38D).
//!
//! `tag = GHASH_H(A || 0* || [8|A|]_64 || 0^64) ^ E_K(J0)` where
//! `H = E_K(0^128)` and `J0` is derived from the nonce by [`derive_j0`].
//!
//! A (key, nonce) pair must authenticate one message only; nothing here
//! detects reuse. [`Mac::finalize`] consumes the instance, and
//! [`Gmac::reset_with_nonce`] is the only way to start another message.

use traits::{
  BlockCipher, Error, Mac,
  cipher::{BLOCK_SIZE, Block},
};
use zeroize::Zeroize;

use crate::ghash::Ghash;

/// Nonce length with the direct `nonce || 0^31 || 1` counter layout.
pub const STANDARD_NONCE_LEN: usize = 12;

/// Initial counter block for `nonce`.
///
/// A 96-bit nonce becomes `nonce || 0x00000001`. Any other length is hashed:
/// `GHASH_H(nonce || 0* || 0^64 || [8|nonce|]_64)`. `ghash` supplies the
/// subkey; its absorbed state is ignored.
///
/// # Errors
///
/// Returns [`Error::InvalidNonceLength`] for an empty nonce.
pub fn derive_j0(ghash: &Ghash, nonce: &[u8]) -> Result<Block, Error> {
  if nonce.is_empty() {
    return Err(Error::InvalidNonceLength { actual: 0 });
  }
  if let Ok(n) = <&[u8; STANDARD_NONCE_LEN]>::try_from(nonce) {
    let mut j0 = [0u8; BLOCK_SIZE];
    let (head, tail) = j0.split_at_mut(STANDARD_NONCE_LEN);
    head.copy_from_slice(n);
    tail.copy_from_slice(&1u32.to_be_bytes());
    return Ok(j0);
  }
  let mut g = ghash.clone();
  g.reset();
  g.update(nonce);
  Ok(g.finish(0, nonce.len() as u64))
}

/// GMAC keyed with block cipher `C` and bound to one nonce.
#[derive(Clone)]
pub struct Gmac<C: BlockCipher> {
  cipher: C,
  ghash: Ghash,
  mask: Block,
}

impl<C: BlockCipher> Gmac<C> {
  /// Key a new instance and bind it to `nonce`.
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidKeyLength`] if `C` rejects the key, or
  /// [`Error::InvalidNonceLength`] for an empty nonce.
  pub fn new(key: &[u8], nonce: &[u8]) -> Result<Self, Error> {
    Self::from_cipher(C::new(key)?, nonce)
  }

  /// Bind an already-expanded cipher to `nonce`.
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidNonceLength`] for an empty nonce.
  pub fn from_cipher(cipher: C, nonce: &[u8]) -> Result<Self, Error> {
    let mut h = [0u8; BLOCK_SIZE];
    cipher.encrypt_block(&mut h);
    let ghash = Ghash::new(&h);
    h.zeroize();

    let mut mask = derive_j0(&ghash, nonce)?;
    cipher.encrypt_block(&mut mask);
    Ok(Self { cipher, ghash, mask })
  }

  /// One-shot tag over `aad`.
  ///
  /// # Errors
  ///
  /// As [`new`](Self::new).
  pub fn mac(key: &[u8], nonce: &[u8], aad: &[u8]) -> Result<Block, Error> {
    let mut m = Self::new(key, nonce)?;
    m.update(aad);
    Ok(m.finalize())
  }

  /// Discard absorbed data and bind to a fresh nonce, keeping the key and `H`.
  ///
  /// On error the instance is unchanged.
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidNonceLength`] for an empty nonce.
  pub fn reset_with_nonce(&mut self, nonce: &[u8]) -> Result<(), Error> {
    let mut mask = derive_j0(&self.ghash, nonce)?;
    self.cipher.encrypt_block(&mut mask);
    self.mask.zeroize();
    self.mask = mask;
    self.ghash.reset();
    Ok(())
  }
}

impl<C: BlockCipher> Mac for Gmac<C> {
  const TAG_SIZE: usize = BLOCK_SIZE;
  type Tag = Block;

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.ghash.update(data);
  }

  fn finalize(self) -> Self::Tag {
    let mut tag = self.ghash.finish(self.ghash.segment_len(), 0);
    for (t, m) in tag.iter_mut().zip(&self.mask) {
      *t ^= m;
    }
    tag
  }
}

impl<C: BlockCipher> Drop for Gmac<C> {
  fn drop(&mut self) {
    self.mask.zeroize();
  }
}
