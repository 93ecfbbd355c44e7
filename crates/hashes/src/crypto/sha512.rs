//! SHA-384 and SHA-512 (FIPS 180-4).
//!
//! 128-byte blocks, 80 rounds over 64-bit words, and a 128-bit big-endian
//! message-length field.

#![allow(clippy::indexing_slicing)] // Fixed-size arrays + compression schedule

use traits::Digest;
use zeroize::Zeroize;

use crate::buffer::BlockBuffer;

const BLOCK_LEN: usize = 128;

const H512: [u64; 8] = [
  0x6a09e667f3bcc908,
  0xbb67ae8584caa73b,
  0x3c6ef372fe94f82b,
  0xa54ff53a5f1d36f1,
  0x510e527fade682d1,
  0x9b05688c2b3e6c1f,
  0x1f83d9abfb41bd6b,
  0x5be0cd19137e2179,
];

const H384: [u64; 8] = [
  0xcbbb9d5dc1059ed8,
  0x629a292a367cd507,
  0x9159015a3070dd17,
  0x152fecd8f70e5939,
  0x67332667ffc00b31,
  0x8eb44a8768581511,
  0xdb0c2e0d64f98fa7,
  0x47b5481dbefa4fa4,
];

const K: [u64; 80] = [
  0x428a2f98d728ae22,
  0x7137449123ef65cd,
  0xb5c0fbcfec4d3b2f,
  0xe9b5dba58189dbbc,
  0x3956c25bf348b538,
  0x59f111f1b605d019,
  0x923f82a4af194f9b,
  0xab1c5ed5da6d8118,
  0xd807aa98a3030242,
  0x12835b0145706fbe,
  0x243185be4ee4b28c,
  0x550c7dc3d5ffb4e2,
  0x72be5d74f27b896f,
  0x80deb1fe3b1696b1,
  0x9bdc06a725c71235,
  0xc19bf174cf692694,
  0xe49b69c19ef14ad2,
  0xefbe4786384f25e3,
  0x0fc19dc68b8cd5b5,
  0x240ca1cc77ac9c65,
  0x2de92c6f592b0275,
  0x4a7484aa6ea6e483,
  0x5cb0a9dcbd41fbd4,
  0x76f988da831153b5,
  0x983e5152ee66dfab,
  0xa831c66d2db43210,
  0xb00327c898fb213f,
  0xbf597fc7beef0ee4,
  0xc6e00bf33da88fc2,
  0xd5a79147930aa725,
  0x06ca6351e003826f,
  0x142929670a0e6e70,
  0x27b70a8546d22ffc,
  0x2e1b21385c26c926,
  0x4d2c6dfc5ac42aed,
  0x53380d139d95b3df,
  0x650a73548baf63de,
  0x766a0abb3c77b2a8,
  0x81c2c92e47edaee6,
  0x92722c851482353b,
  0xa2bfe8a14cf10364,
  0xa81a664bbc423001,
  0xc24b8b70d0f89791,
  0xc76c51a30654be30,
  0xd192e819d6ef5218,
  0xd69906245565a910,
  0xf40e35855771202a,
  0x106aa07032bbd1b8,
  0x19a4c116b8d2d0c8,
  0x1e376c085141ab53,
  0x2748774cdf8eeb99,
  0x34b0bcb5e19b48a8,
  0x391c0cb3c5c95a63,
  0x4ed8aa4ae3418acb,
  0x5b9cca4f7763e373,
  0x682e6ff3d6b2b8a3,
  0x748f82ee5defb2fc,
  0x78a5636f43172f60,
  0x84c87814a1f0ab72,
  0x8cc702081a6439ec,
  0x90befffa23631e28,
  0xa4506cebde82bde9,
  0xbef9a3f7b2c67915,
  0xc67178f2e372532b,
  0xca273eceea26619c,
  0xd186b8c721c0c207,
  0xeada7dd6cde0eb1e,
  0xf57d4f7fee6ed178,
  0x06f067aa72176fba,
  0x0a637dc5a2c898a6,
  0x113f9804bef90dae,
  0x1b710b35131c471b,
  0x28db77f523047d84,
  0x32caab7b40c72493,
  0x3c9ebe0a15c9bebc,
  0x431d67c49c100d4c,
  0x4cc5d4becb3e42b6,
  0x597f299cfc657e2a,
  0x5fcb6fab3ad6faec,
  0x6c44198c4a475817,
];

/// Compress one 128-byte block into `state`.
pub fn compress_block(state: &mut [u64; 8], block: &[u8; BLOCK_LEN]) {
  let mut w = [0u64; 16];
  let (words, _) = block.as_chunks::<8>();
  for (dst, src) in w.iter_mut().zip(words) {
    *dst = u64::from_be_bytes(*src);
  }

  let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

  for (t, &k) in K.iter().enumerate() {
    if t >= 16 {
      let w15 = w[(t - 15) & 15];
      let w2 = w[(t - 2) & 15];
      let s0 = w15.rotate_right(1) ^ w15.rotate_right(8) ^ (w15 >> 7);
      let s1 = w2.rotate_right(19) ^ w2.rotate_right(61) ^ (w2 >> 6);
      w[t & 15] = s1.wrapping_add(w[(t - 7) & 15]).wrapping_add(s0).wrapping_add(w[t & 15]);
    }

    let big_s1 = e.rotate_right(14) ^ e.rotate_right(18) ^ e.rotate_right(41);
    let t1 = h
      .wrapping_add(big_s1)
      .wrapping_add((e & f) ^ (!e & g))
      .wrapping_add(k)
      .wrapping_add(w[t & 15]);
    let big_s0 = a.rotate_right(28) ^ a.rotate_right(34) ^ a.rotate_right(39);
    let t2 = big_s0.wrapping_add((a & b) ^ (a & c) ^ (b & c));

    h = g;
    g = f;
    f = e;
    e = d.wrapping_add(t1);
    d = c;
    c = b;
    b = a;
    a = t1.wrapping_add(t2);
  }

  for (s, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
    *s = s.wrapping_add(v);
  }

  w.zeroize();
}

#[derive(Clone)]
struct Core {
  state: [u64; 8],
  buffer: BlockBuffer<BLOCK_LEN>,
}

impl Core {
  #[inline]
  const fn new(iv: [u64; 8]) -> Self {
    Self { state: iv, buffer: BlockBuffer::new() }
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    let state = &mut self.state;
    self.buffer.update(data, |block| compress_block(state, block));
  }

  fn finalize<const N: usize>(&self) -> [u8; N] {
    let mut state = self.state;
    // Byte counts are tracked in a u64; the upper length bits are always zero.
    let bit_len = u128::from(self.buffer.total_len()) << 3;
    self.buffer.finish_md(&bit_len.to_be_bytes(), |block| compress_block(&mut state, block));

    let mut full = [0u8; 64];
    let (chunks, _) = full.as_chunks_mut::<8>();
    for (dst, word) in chunks.iter_mut().zip(state) {
      *dst = word.to_be_bytes();
    }
    let mut out = [0u8; N];
    out.copy_from_slice(&full[..N]);
    state.zeroize();
    full.zeroize();
    out
  }
}

impl Zeroize for Core {
  fn zeroize(&mut self) {
    self.state.zeroize();
    self.buffer.zeroize();
  }
}

/// SHA-384 hasher.
#[derive(Clone)]
pub struct Sha384(Core);

/// SHA-512 hasher.
#[derive(Clone)]
pub struct Sha512(Core);

impl Default for Sha384 {
  #[inline]
  fn default() -> Self {
    Self(Core::new(H384))
  }
}

impl Default for Sha512 {
  #[inline]
  fn default() -> Self {
    Self(Core::new(H512))
  }
}

impl Digest for Sha384 {
  const NAME: &'static str = "SHA-384";
  const BLOCK_SIZE: usize = BLOCK_LEN;
  const OUTPUT_SIZE: usize = 48;
  type Output = [u8; 48];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.0.update(data);
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    self.0.finalize::<48>()
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::default();
  }
}

impl Digest for Sha512 {
  const NAME: &'static str = "SHA-512";
  const BLOCK_SIZE: usize = BLOCK_LEN;
  const OUTPUT_SIZE: usize = 64;
  type Output = [u8; 64];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.0.update(data);
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    self.0.finalize::<64>()
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::default();
  }
}

impl Zeroize for Sha384 {
  #[inline]
  fn zeroize(&mut self) {
    self.0.zeroize();
  }
}

impl Zeroize for Sha512 {
  #[inline]
  fn zeroize(&mut self) {
    self.0.zeroize();
  }
}
