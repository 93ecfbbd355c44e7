//! CMAC (NIST SP 800-38B, RFC 4493) over any 128-bit block cipher.
//!
//! Absorption goes through [`BlockBuffer::update_lazy`], so the last complete
//! block is always still pending at finalize. That block is then XORed with
//! `K1` if it is full, or padded with `0x80 || 0*` and XORed with `K2`
//! otherwise. An empty message takes the padded path.

use traits::{
  BlockCipher, Error, Mac, MacReset,
  cipher::{BLOCK_SIZE, Block},
};
use zeroize::Zeroize;

use hashes::BlockBuffer;

/// Reduction constant for doubling in GF(2^128), big-endian.
const RB: u128 = 0x87;

/// Multiply a block by `x` in GF(2^128) (left shift with conditional reduction).
#[inline]
#[must_use]
pub fn dbl(block: &Block) -> Block {
  let v = u128::from_be_bytes(*block);
  let carry = v >> 127;
  ((v << 1) ^ (RB & 0u128.wrapping_sub(carry))).to_be_bytes()
}

#[inline(always)]
fn xor_into(dst: &mut Block, src: &Block) {
  for (d, s) in dst.iter_mut().zip(src) {
    *d ^= s;
  }
}

/// CMAC keyed with block cipher `C`.
#[derive(Clone)]
pub struct Cmac<C: BlockCipher> {
  cipher: C,
  k1: Block,
  k2: Block,
  state: Block,
  buffer: BlockBuffer<BLOCK_SIZE>,
}

impl<C: BlockCipher> Cmac<C> {
  /// Key a new instance.
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidKeyLength`] if `C` does not accept `key.len()`.
  pub fn new(key: &[u8]) -> Result<Self, Error> {
    C::new(key).map(Self::from_cipher)
  }

  /// Key from an already-expanded cipher, deriving `K1` and `K2`.
  #[must_use]
  pub fn from_cipher(cipher: C) -> Self {
    let mut l = [0u8; BLOCK_SIZE];
    cipher.encrypt_block(&mut l);
    let k1 = dbl(&l);
    let k2 = dbl(&k1);
    l.zeroize();
    Self { cipher, k1, k2, state: [0u8; BLOCK_SIZE], buffer: BlockBuffer::new() }
  }

  /// One-shot tag of `data` under `key`.
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidKeyLength`] if `C` does not accept `key.len()`.
  pub fn mac(key: &[u8], data: &[u8]) -> Result<Block, Error> {
    let mut m = Self::new(key)?;
    m.update(data);
    Ok(m.finalize())
  }

  fn tag(&self) -> Block {
    let pos = self.buffer.position();
    let mut last = self.buffer.zero_padded();
    if pos == BLOCK_SIZE {
      xor_into(&mut last, &self.k1);
    } else {
      if let Some(b) = last.get_mut(pos) {
        *b = 0x80;
      }
      xor_into(&mut last, &self.k2);
    }
    xor_into(&mut last, &self.state);
    self.cipher.encrypt_block(&mut last);
    last
  }
}

impl<C: BlockCipher> Mac for Cmac<C> {
  const TAG_SIZE: usize = BLOCK_SIZE;
  type Tag = Block;

  fn update(&mut self, data: &[u8]) {
    let (state, cipher) = (&mut self.state, &self.cipher);
    self.buffer.update_lazy(data, |block| {
      xor_into(state, block);
      cipher.encrypt_block(state);
    });
  }

  #[inline]
  fn finalize(self) -> Self::Tag {
    self.tag()
  }
}

impl<C: BlockCipher> MacReset for Cmac<C> {
  fn reset(&mut self) {
    self.state.zeroize();
    self.buffer.reset();
  }

  fn finalize_reset(&mut self) -> Self::Tag {
    let tag = self.tag();
    self.reset();
    tag
  }
}

impl<C: BlockCipher> Drop for Cmac<C> {
  fn drop(&mut self) {
    self.k1.zeroize();
    self.k2.zeroize();
    self.state.zeroize();
    self.buffer.zeroize();
  }
}

#[cfg(all(test, feature = "aes"))]
mod tests {
  extern crate alloc;

  use alloc::vec::Vec;

  use traits::{Error, Mac, MacReset};

  use super::{Cmac, dbl};
  use crate::aes::{Aes128, Aes256};

  fn unhex(s: &str) -> Vec<u8> {
    (0..s.len()).step_by(2).map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap()).collect()
  }

  const KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";
  const MSG: &str = "6bc1bee22e409f96e93d7e117393172aae2d8a571e03ac9c9eb76fac45af8e51\
                     30c81c46a35ce411e5fbc1191a0a52eff69f2445df4f9b17ad2b417be66c3710";

  #[test]
  fn rfc4493_subkeys() {
    let m = Cmac::<Aes128>::new(&unhex(KEY)).unwrap();
    assert_eq!(m.k1.to_vec(), unhex("fbeed618357133667c85e08f7236a8de"));
    assert_eq!(m.k2.to_vec(), unhex("f7ddac306ae266ccf90bc11ee46d513b"));
  }

  #[test]
  fn doubling_reduces_on_carry() {
    let l: [u8; 16] = unhex("7df76b0c1ab899b33e42f047b91b546f").try_into().unwrap();
    assert_eq!(dbl(&l).to_vec(), unhex("fbeed618357133667c85e08f7236a8de"));
    let mut top = [0u8; 16];
    top[0] = 0x80;
    let mut expected = [0u8; 16];
    expected[15] = 0x87;
    assert_eq!(dbl(&top), expected);
  }

  #[test]
  fn rfc4493_examples() {
    let key = unhex(KEY);
    let msg = unhex(MSG);
    let cases = [
      (0usize, "bb1d6929e95937287fa37d129b756746"),
      (16, "070a16b46b4d4144f79bdd9dd04a287c"),
      (40, "dfa66747de9ae63030ca32611497c827"),
      (64, "51f0bebf7e3b9d92fc49741779363cfe"),
    ];
    for (len, expected) in cases {
      let tag = Cmac::<Aes128>::mac(&key, &msg[..len]).unwrap();
      assert_eq!(tag.to_vec(), unhex(expected), "len {len}");
    }
  }

  #[test]
  fn block_boundaries_are_chunking_invariant() {
    let key = unhex(KEY);
    let msg = unhex(MSG);
    for len in [15usize, 16, 17, 32, 33, 48, 64] {
      let expected = Cmac::<Aes128>::mac(&key, &msg[..len]).unwrap();

      let mut bytewise = Cmac::<Aes128>::new(&key).unwrap();
      for b in &msg[..len] {
        bytewise.update(core::slice::from_ref(b));
        bytewise.update(&[]);
      }
      assert_eq!(bytewise.finalize(), expected, "bytewise len {len}");

      let mut blockwise = Cmac::<Aes128>::new(&key).unwrap();
      for chunk in msg[..len].chunks(16) {
        blockwise.update(chunk);
      }
      assert_eq!(blockwise.finalize(), expected, "blockwise len {len}");
    }
  }

  #[test]
  fn reset_reuses_subkeys() {
    let key = unhex(KEY);
    let msg = unhex(MSG);
    let mut m = Cmac::<Aes128>::new(&key).unwrap();
    m.update(&msg);
    let full = m.finalize_reset();
    assert_eq!(full.to_vec(), unhex("51f0bebf7e3b9d92fc49741779363cfe"));
    assert_eq!(m.finalize_reset().to_vec(), unhex("bb1d6929e95937287fa37d129b756746"));
    m.update(&msg[..16]);
    assert!(m.verify(&unhex("070a16b46b4d4144f79bdd9dd04a287c")).is_ok());
  }

  #[test]
  fn rfc4493_aes256_empty() {
    // NIST SP 800-38B D.3, example 9.
    let key = unhex("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4");
    let tag = Cmac::<Aes256>::mac(&key, &[]).unwrap();
    assert_eq!(tag.to_vec(), unhex("028962f61b7bf89efc6b551f4667d983"));
  }

  #[test]
  fn wrong_key_length() {
    assert_eq!(Cmac::<Aes128>::new(&[0u8; 15]).err(), Some(Error::InvalidKeyLength { actual: 15 }));
    assert_eq!(Cmac::<Aes128>::new(&[]).err(), Some(Error::InvalidKeyLength { actual: 0 }));
  }
}
