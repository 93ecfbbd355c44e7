//! Keccak-f[1600] permutation and a byte-oriented sponge.
//!
//! The sponge absorbs through the shared [`BlockBuffer`] with the rate as the
//! block length. Padding is the multi-rate `pad10*1` with the domain bits
//! folded into the first pad byte, so SHA-3 (`0x06`) and SHAKE (`0x1f`) differ
//! only in the separator passed to [`Sponge::finalize`].

#![allow(clippy::indexing_slicing)] // Lane indices are bounded by the 5x5 state and RATE

use zeroize::Zeroize;

use crate::buffer::BlockBuffer;

const ROUNDS: usize = 24;

const RC: [u64; ROUNDS] = [
  0x0000_0000_0000_0001,
  0x0000_0000_0000_8082,
  0x8000_0000_0000_808a,
  0x8000_0000_8000_8000,
  0x0000_0000_0000_808b,
  0x0000_0000_8000_0001,
  0x8000_0000_8000_8081,
  0x8000_0000_0000_8009,
  0x0000_0000_0000_008a,
  0x0000_0000_0000_0088,
  0x0000_0000_8000_8009,
  0x0000_0000_8000_000a,
  0x0000_0000_8000_808b,
  0x8000_0000_0000_008b,
  0x8000_0000_0000_8089,
  0x8000_0000_0000_8003,
  0x8000_0000_0000_8002,
  0x8000_0000_0000_0080,
  0x0000_0000_0000_800a,
  0x8000_0000_8000_000a,
  0x8000_0000_8000_8081,
  0x8000_0000_0000_8080,
  0x0000_0000_8000_0001,
  0x8000_0000_8000_8008,
];

// ρ offsets along the π walk starting at lane 1.
const RHO: [u32; 24] = [1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44];

// π destination lanes, in walk order.
const PI: [usize; 24] = [10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1];

/// Keccak-f[1600] over a 25-lane state (lane `x + 5y`).
pub fn keccak_f1600(a: &mut [u64; 25]) {
  for rc in RC {
    // θ
    let mut c = [0u64; 5];
    for (x, col) in c.iter_mut().enumerate() {
      *col = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
    }
    for x in 0..5 {
      let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
      for y in (0..25).step_by(5) {
        a[y + x] ^= d;
      }
    }

    // ρ and π
    let mut carry = a[1];
    for (&dst, &rot) in PI.iter().zip(RHO.iter()) {
      let next = a[dst];
      a[dst] = carry.rotate_left(rot);
      carry = next;
    }

    // χ
    for y in (0..25).step_by(5) {
      let row = [a[y], a[y + 1], a[y + 2], a[y + 3], a[y + 4]];
      for x in 0..5 {
        a[y + x] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
      }
    }

    // ι
    a[0] ^= rc;
  }
}

#[inline(always)]
fn xor_block<const RATE: usize>(state: &mut [u64; 25], block: &[u8; RATE]) {
  let (lanes, _) = block.as_chunks::<8>();
  for (lane, bytes) in state.iter_mut().zip(lanes) {
    *lane ^= u64::from_le_bytes(*bytes);
  }
}

/// Absorbing sponge with a rate of `RATE` bytes.
#[derive(Clone)]
pub struct Sponge<const RATE: usize> {
  state: [u64; 25],
  buffer: BlockBuffer<RATE>,
}

impl<const RATE: usize> Default for Sponge<RATE> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<const RATE: usize> Sponge<RATE> {
  /// A zeroed sponge.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    const { assert!(RATE % 8 == 0 && RATE < 200) };
    Self { state: [0u64; 25], buffer: BlockBuffer::new() }
  }

  /// Absorb `data`, permuting after each full rate block.
  pub fn absorb(&mut self, data: &[u8]) {
    let state = &mut self.state;
    self.buffer.update(data, |block| {
      xor_block(state, block);
      keccak_f1600(state);
    });
  }

  /// Pad a copy of the state with domain separator `ds` and switch to squeezing.
  #[must_use]
  pub fn finalize(&self, ds: u8) -> SpongeReader<RATE> {
    let mut state = self.state;
    let mut block = self.buffer.zero_padded();
    block[self.buffer.position()] ^= ds;
    block[RATE - 1] ^= 0x80;
    xor_block(&mut state, &block);
    keccak_f1600(&mut state);
    block.zeroize();
    SpongeReader { state, pos: 0 }
  }

  /// Return to the zero state.
  #[inline]
  pub fn reset(&mut self) {
    self.zeroize();
  }
}

impl<const RATE: usize> Zeroize for Sponge<RATE> {
  fn zeroize(&mut self) {
    self.state.zeroize();
    self.buffer.zeroize();
  }
}

/// Squeezing half of a sponge.
#[derive(Clone)]
pub struct SpongeReader<const RATE: usize> {
  state: [u64; 25],
  pos: usize,
}

impl<const RATE: usize> SpongeReader<RATE> {
  /// Write the next `out.len()` bytes of the output stream.
  pub fn squeeze(&mut self, out: &mut [u8]) {
    for byte in out {
      if self.pos == RATE {
        keccak_f1600(&mut self.state);
        self.pos = 0;
      }
      *byte = (self.state[self.pos / 8] >> (8 * (self.pos % 8))) as u8;
      self.pos += 1;
    }
  }
}

impl<const RATE: usize> Zeroize for SpongeReader<RATE> {
  fn zeroize(&mut self) {
    self.state.zeroize();
    self.pos.zeroize();
  }
}

#[cfg(test)]
mod tests {
  use super::{Sponge, keccak_f1600};

  #[test]
  fn permutation_of_zero_state() {
    // Keccak team reference: first lanes after one Keccak-f[1600] on zero.
    let mut state = [0u64; 25];
    keccak_f1600(&mut state);
    assert_eq!(state[0], 0xf1258f7940e1dde7);
    assert_eq!(state[1], 0x84d5ccf933c0478a);
    assert_eq!(state[24], 0xeaf1ff7b5ceca249);
  }

  #[test]
  fn squeeze_is_continuous() {
    let mut sponge = Sponge::<168>::new();
    sponge.absorb(b"stream");
    let mut whole = [0u8; 400];
    sponge.finalize(0x1f).squeeze(&mut whole);

    let mut reader = sponge.finalize(0x1f);
    let mut parts = [0u8; 400];
    let (a, rest) = parts.split_at_mut(1);
    let (b, c) = rest.split_at_mut(200);
    reader.squeeze(a);
    reader.squeeze(b);
    reader.squeeze(c);
    assert_eq!(whole, parts);
  }

  #[test]
  fn finalize_leaves_sponge_absorbing() {
    let mut a = Sponge::<136>::new();
    a.absorb(b"ab");
    let _ = a.finalize(0x06);
    a.absorb(b"c");

    let mut b = Sponge::<136>::new();
    b.absorb(b"abc");

    let (mut x, mut y) = ([0u8; 32], [0u8; 32]);
    a.finalize(0x06).squeeze(&mut x);
    b.finalize(0x06).squeeze(&mut y);
    assert_eq!(x, y);
  }
}
