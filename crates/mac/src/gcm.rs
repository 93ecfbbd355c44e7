//! Galois/Counter Mode authenticated encryption (NIST SP 800-38D).
//!
//! CTR-mode encryption starting at `inc32(J0)` plus a GHASH tag over the
//! zero-padded AAD and ciphertext, sharing `J0` derivation with [`Gmac`].
//! Tags are always the full 16 bytes.
//!
//! [`Gmac`]: crate::gmac::Gmac

use traits::{
  BlockCipher, Error, ct,
  cipher::{BLOCK_SIZE, Block},
};
use zeroize::Zeroize;

use crate::{ghash::Ghash, gmac::derive_j0};

/// Tag size in bytes.
pub const TAG_SIZE: usize = 16;

/// Longest plaintext one nonce may encrypt: `2^39 - 256` bits.
pub const MAX_MESSAGE_LEN: u64 = (1 << 36) - 32;

/// Increment the low 32 bits of a counter block, big-endian, wrapping.
#[inline]
fn inc32(block: &mut Block) {
  let (_, ctr) = block.split_at_mut(BLOCK_SIZE - 4);
  let mut word = [0u8; 4];
  word.copy_from_slice(ctr);
  ctr.copy_from_slice(&u32::from_be_bytes(word).wrapping_add(1).to_be_bytes());
}

/// AES-GCM style AEAD over block cipher `C`.
#[derive(Clone)]
pub struct Gcm<C: BlockCipher> {
  cipher: C,
  ghash: Ghash,
}

impl<C: BlockCipher> Gcm<C> {
  /// Key a new instance.
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidKeyLength`] if `C` rejects the key.
  pub fn new(key: &[u8]) -> Result<Self, Error> {
    Ok(Self::from_cipher(C::new(key)?))
  }

  /// Wrap an already-expanded cipher.
  #[must_use]
  pub fn from_cipher(cipher: C) -> Self {
    let mut h = [0u8; BLOCK_SIZE];
    cipher.encrypt_block(&mut h);
    let ghash = Ghash::new(&h);
    h.zeroize();
    Self { cipher, ghash }
  }

  fn apply_keystream(&self, j0: &Block, buffer: &mut [u8]) {
    let mut ctr = *j0;
    for chunk in buffer.chunks_mut(BLOCK_SIZE) {
      inc32(&mut ctr);
      let mut ks = ctr;
      self.cipher.encrypt_block(&mut ks);
      for (b, k) in chunk.iter_mut().zip(&ks) {
        *b ^= k;
      }
      ks.zeroize();
    }
  }

  fn compute_tag(&self, j0: &Block, aad: &[u8], ciphertext: &[u8]) -> Block {
    let mut g = self.ghash.clone();
    g.update(aad);
    g.flush();
    g.update(ciphertext);
    let mut tag = g.finish(aad.len() as u64, ciphertext.len() as u64);

    let mut mask = *j0;
    self.cipher.encrypt_block(&mut mask);
    for (t, m) in tag.iter_mut().zip(&mask) {
      *t ^= m;
    }
    mask.zeroize();
    tag
  }

  fn check_len(len: usize) -> Result<(), Error> {
    if len as u64 > MAX_MESSAGE_LEN {
      return Err(Error::InvalidState("message exceeds the GCM per-nonce limit"));
    }
    Ok(())
  }

  /// Encrypt `buffer` in place and return the tag.
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidNonceLength`] for an empty nonce, or
  /// [`Error::InvalidState`] if `buffer` exceeds [`MAX_MESSAGE_LEN`].
  pub fn encrypt_in_place_detached(&self, nonce: &[u8], aad: &[u8], buffer: &mut [u8]) -> Result<Block, Error> {
    Self::check_len(buffer.len())?;
    let mut j0 = derive_j0(&self.ghash, nonce)?;
    self.apply_keystream(&j0, buffer);
    let tag = self.compute_tag(&j0, aad, buffer);
    j0.zeroize();
    Ok(tag)
  }

  /// Verify `tag` and, only if it matches, decrypt `buffer` in place.
  ///
  /// The tag comparison is constant-time over all 16 bytes. On failure
  /// `buffer` still holds the ciphertext.
  ///
  /// # Errors
  ///
  /// Returns [`Error::Verification`] if the tag does not match, or the input
  /// errors of [`encrypt_in_place_detached`](Self::encrypt_in_place_detached).
  pub fn decrypt_in_place_detached(&self, nonce: &[u8], aad: &[u8], buffer: &mut [u8], tag: &[u8]) -> Result<(), Error> {
    Self::check_len(buffer.len())?;
    let mut j0 = derive_j0(&self.ghash, nonce)?;
    let mut expected = self.compute_tag(&j0, aad, buffer);
    let verdict = ct::verify_tag(&expected, tag);
    expected.zeroize();

    if verdict.is_ok() {
      self.apply_keystream(&j0, buffer);
    }
    j0.zeroize();
    verdict.map_err(Error::from)
  }
}
