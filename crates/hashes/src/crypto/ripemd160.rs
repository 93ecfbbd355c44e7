//! RIPEMD-160.
//!
//! Portable, `no_std`, pure Rust. Each 64-byte block runs two independent
//! 80-round lines (left and right) over the block's sixteen little-endian
//! words, then cross-mixes their final registers into the chaining state.

#![allow(clippy::indexing_slicing)] // Round tables are indexed by round number < 80

use traits::Digest;
use zeroize::Zeroize;

use crate::buffer::BlockBuffer;

const BLOCK_LEN: usize = 64;
const OUT_LEN: usize = 20;

const H0: [u32; 5] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476, 0xc3d2_e1f0];

// Additive constants per 16-round group.
const KL: [u32; 5] = [0x0000_0000, 0x5a82_7999, 0x6ed9_eba1, 0x8f1b_bcdc, 0xa953_fd4e];
const KR: [u32; 5] = [0x50a2_8be6, 0x5c4d_d124, 0x6d70_3ef3, 0x7a6d_76e9, 0x0000_0000];

// Message word selection.
const RL: [usize; 80] = [
  0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, //
  7, 4, 13, 1, 10, 6, 15, 3, 12, 0, 9, 5, 2, 14, 11, 8, //
  3, 10, 14, 4, 9, 15, 8, 1, 2, 7, 0, 6, 13, 11, 5, 12, //
  1, 9, 11, 10, 0, 8, 12, 4, 13, 3, 7, 15, 14, 5, 6, 2, //
  4, 0, 5, 9, 7, 12, 2, 10, 14, 1, 3, 8, 11, 6, 15, 13,
];
const RR: [usize; 80] = [
  5, 14, 7, 0, 9, 2, 11, 4, 13, 6, 15, 8, 1, 10, 3, 12, //
  6, 11, 3, 7, 0, 13, 5, 10, 14, 15, 8, 12, 4, 9, 1, 2, //
  15, 5, 1, 3, 7, 14, 6, 9, 11, 8, 12, 2, 10, 0, 4, 13, //
  8, 6, 4, 1, 3, 11, 15, 0, 5, 12, 2, 13, 9, 7, 10, 14, //
  12, 15, 10, 4, 1, 5, 8, 7, 6, 2, 13, 14, 0, 3, 9, 11,
];

// Left-rotation amounts.
const SL: [u32; 80] = [
  11, 14, 15, 12, 5, 8, 7, 9, 11, 13, 14, 15, 6, 7, 9, 8, //
  7, 6, 8, 13, 11, 9, 7, 15, 7, 12, 15, 9, 11, 7, 13, 12, //
  11, 13, 6, 7, 14, 9, 13, 15, 14, 8, 13, 6, 5, 12, 7, 5, //
  11, 12, 14, 15, 14, 15, 9, 8, 9, 14, 5, 6, 8, 6, 5, 12, //
  9, 15, 5, 11, 6, 8, 13, 12, 5, 12, 13, 14, 11, 8, 5, 6,
];
const SR: [u32; 80] = [
  8, 9, 9, 11, 13, 15, 15, 5, 7, 7, 8, 11, 14, 14, 12, 6, //
  9, 13, 15, 7, 12, 8, 9, 11, 7, 7, 12, 7, 6, 15, 13, 11, //
  9, 7, 15, 11, 8, 6, 6, 14, 12, 13, 5, 14, 13, 13, 7, 5, //
  15, 5, 8, 11, 14, 14, 6, 14, 6, 9, 12, 9, 12, 5, 15, 8, //
  8, 5, 12, 9, 12, 5, 14, 6, 8, 13, 6, 5, 15, 13, 11, 11,
];

/// The five boolean functions, selected by 16-round group.
///
/// The left line walks groups 0..5, the right line walks them in reverse.
#[inline(always)]
fn f(group: usize, x: u32, y: u32, z: u32) -> u32 {
  match group {
    0 => x ^ y ^ z,
    1 => (x & y) | (!x & z),
    2 => (x | !y) ^ z,
    3 => (x & z) | (y & !z),
    _ => x ^ (y | !z),
  }
}

/// One line's register file.
#[derive(Clone, Copy)]
struct Line {
  a: u32,
  b: u32,
  c: u32,
  d: u32,
  e: u32,
}

impl Line {
  #[inline(always)]
  fn from_state(state: &[u32; 5]) -> Self {
    Self { a: state[0], b: state[1], c: state[2], d: state[3], e: state[4] }
  }

  #[inline(always)]
  fn step(&mut self, group: usize, k: u32, w: u32, s: u32) {
    let t = self
      .a
      .wrapping_add(f(group, self.b, self.c, self.d))
      .wrapping_add(w)
      .wrapping_add(k)
      .rotate_left(s)
      .wrapping_add(self.e);
    self.a = self.e;
    self.e = self.d;
    self.d = self.c.rotate_left(10);
    self.c = self.b;
    self.b = t;
  }
}

/// RIPEMD-160 hasher.
#[derive(Clone)]
pub struct Ripemd160 {
  state: [u32; 5],
  buffer: BlockBuffer<BLOCK_LEN>,
}

impl Default for Ripemd160 {
  #[inline]
  fn default() -> Self {
    Self { state: H0, buffer: BlockBuffer::new() }
  }
}

impl Ripemd160 {
  /// Compress one 64-byte block into `state`.
  pub fn compress_block(state: &mut [u32; 5], block: &[u8; BLOCK_LEN]) {
    let mut w = [0u32; 16];
    let (words, _) = block.as_chunks::<4>();
    for (dst, src) in w.iter_mut().zip(words) {
      *dst = u32::from_le_bytes(*src);
    }

    let mut left = Line::from_state(state);
    let mut right = left;

    for j in 0..80 {
      let group = j / 16;
      left.step(group, KL[group], w[RL[j]], SL[j]);
      right.step(4 - group, KR[group], w[RR[j]], SR[j]);
    }

    let t = state[1].wrapping_add(left.c).wrapping_add(right.d);
    state[1] = state[2].wrapping_add(left.d).wrapping_add(right.e);
    state[2] = state[3].wrapping_add(left.e).wrapping_add(right.a);
    state[3] = state[4].wrapping_add(left.a).wrapping_add(right.b);
    state[4] = state[0].wrapping_add(left.b).wrapping_add(right.c);
    state[0] = t;

    w.zeroize();
  }
}

impl Digest for Ripemd160 {
  const NAME: &'static str = "RIPEMD-160";
  const BLOCK_SIZE: usize = BLOCK_LEN;
  const OUTPUT_SIZE: usize = OUT_LEN;
  type Output = [u8; OUT_LEN];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.buffer.update(data, |block| Self::compress_block(&mut self.state, block));
  }

  fn finalize(&self) -> Self::Output {
    let mut state = self.state;
    let bit_len = self.buffer.total_len().wrapping_mul(8);
    self.buffer.finish_md(&bit_len.to_le_bytes(), |block| Self::compress_block(&mut state, block));

    let mut out = [0u8; OUT_LEN];
    let (chunks, _) = out.as_chunks_mut::<4>();
    for (dst, word) in chunks.iter_mut().zip(state) {
      *dst = word.to_le_bytes();
    }
    state.zeroize();
    out
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::default();
  }
}

impl Zeroize for Ripemd160 {
  fn zeroize(&mut self) {
    self.state.zeroize();
    self.buffer.zeroize();
  }
}
