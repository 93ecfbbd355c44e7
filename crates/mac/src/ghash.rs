//! GHASH over GF(2^128) (NIST SP 800-38D §6.4).
//!
//! Blocks are read as big-endian `u128`s, so bit 0 of the block (the most
//! significant bit of byte 0) is the coefficient of x^0. Multiplication is the
//! bit-serial shift-and-add from the standard, with the reduction constant
//! `0xE1 || 0^120` injected whenever a set bit shifts out of the low end. Every
//! conditional step is a mask, never a branch on secret data.

use traits::cipher::{BLOCK_SIZE, Block};
use zeroize::Zeroize;

use hashes::BlockBuffer;

const R: u128 = 0xE1 << 120;

/// Multiply `x` by `y` in GF(2^128) with the GCM bit order.
#[must_use]
pub fn gf_mul(x: u128, y: u128) -> u128 {
  let mut z = 0u128;
  let mut v = y;
  for i in (0..128).rev() {
    let bit = (x >> i) & 1;
    z ^= v & 0u128.wrapping_sub(bit);
    let lsb = v & 1;
    v = (v >> 1) ^ (R & 0u128.wrapping_sub(lsb));
  }
  z
}

/// Streaming GHASH keyed with the hash subkey `H`.
#[derive(Clone)]
pub struct Ghash {
  h: u128,
  y: u128,
  buffer: BlockBuffer<BLOCK_SIZE>,
}

impl Ghash {
  /// Key with the hash subkey (for GCM, `H = E_K(0^128)`).
  #[must_use]
  pub fn new(h: &Block) -> Self {
    Self { h: u128::from_be_bytes(*h), y: 0, buffer: BlockBuffer::new() }
  }

  #[inline(always)]
  fn absorb(y: &mut u128, h: u128, block: &Block) {
    *y = gf_mul(*y ^ u128::from_be_bytes(*block), h);
  }

  /// Absorb bytes, buffering any partial block.
  pub fn update(&mut self, data: &[u8]) {
    let (y, h) = (&mut self.y, self.h);
    self.buffer.update(data, |block| Self::absorb(y, h, block));
  }

  /// Zero-pad and absorb any pending partial block, starting a new segment.
  ///
  /// GCM pads the AAD and the ciphertext independently; call this between them.
  pub fn flush(&mut self) {
    if self.buffer.position() != 0 {
      let mut block = self.buffer.zero_padded();
      Self::absorb(&mut self.y, self.h, &block);
      block.zeroize();
    }
    self.buffer.reset();
  }

  /// Bytes absorbed since construction or the last [`flush`](Self::flush).
  #[inline]
  #[must_use]
  pub const fn segment_len(&self) -> u64 {
    self.buffer.total_len()
  }

  /// Finish over a copy of the state: pad the pending segment, then absorb the
  /// length block `[8 * first_len]_64 || [8 * second_len]_64`.
  #[must_use]
  pub fn finish(&self, first_len: u64, second_len: u64) -> Block {
    let mut y = self.y;
    if self.buffer.position() != 0 {
      let mut block = self.buffer.zero_padded();
      Self::absorb(&mut y, self.h, &block);
      block.zeroize();
    }
    let lengths = (u128::from(first_len.wrapping_mul(8)) << 64) | u128::from(second_len.wrapping_mul(8));
    Self::absorb(&mut y, self.h, &lengths.to_be_bytes());
    let out = y.to_be_bytes();
    y.zeroize();
    out
  }

  /// Discard absorbed data, keeping `H`.
  pub fn reset(&mut self) {
    self.y.zeroize();
    self.buffer.reset();
  }
}

impl Drop for Ghash {
  fn drop(&mut self) {
    self.h.zeroize();
    self.y.zeroize();
    self.buffer.zeroize();
  }
}
