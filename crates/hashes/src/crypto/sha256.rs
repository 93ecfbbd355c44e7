//! SHA-224 and SHA-256 (FIPS 180-4).
//!
//! Both share one compression function and differ only in the initial hash
//! value and the number of output words.

#![allow(clippy::indexing_slicing)] // Fixed-size arrays + compression schedule

use traits::Digest;
use zeroize::Zeroize;

use crate::buffer::BlockBuffer;

const BLOCK_LEN: usize = 64;

const H256: [u32; 8] = [
  0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

const H224: [u32; 8] = [
  0xc1059ed8, 0x367cd507, 0x3070dd17, 0xf70e5939, 0xffc00b31, 0x68581511, 0x64f98fa7, 0xbefa4fa4,
];

const K: [u32; 64] = [
  0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5, 0xd807aa98,
  0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174, 0xe49b69c1, 0xefbe4786,
  0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da, 0x983e5152, 0xa831c66d, 0xb00327c8,
  0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967, 0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13,
  0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85, 0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819,
  0xd6990624, 0xf40e3585, 0x106aa070, 0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a,
  0x5b9cca4f, 0x682e6ff3, 0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7,
  0xc67178f2,
];

#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
  x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
  x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
fn small_sigma0(x: u32) -> u32 {
  x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
fn small_sigma1(x: u32) -> u32 {
  x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Compress one 64-byte block into `state`.
pub fn compress_block(state: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
  // 16-word ring buffer message schedule.
  let mut w = [0u32; 16];
  let (words, _) = block.as_chunks::<4>();
  for (dst, src) in w.iter_mut().zip(words) {
    *dst = u32::from_be_bytes(*src);
  }

  let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

  for (t, &k) in K.iter().enumerate() {
    if t >= 16 {
      w[t & 15] = small_sigma1(w[(t - 2) & 15])
        .wrapping_add(w[(t - 7) & 15])
        .wrapping_add(small_sigma0(w[(t - 15) & 15]))
        .wrapping_add(w[t & 15]);
    }

    let t1 = h
      .wrapping_add(big_sigma1(e))
      .wrapping_add((e & f) ^ (!e & g))
      .wrapping_add(k)
      .wrapping_add(w[t & 15]);
    let t2 = big_sigma0(a).wrapping_add((a & b) ^ (a & c) ^ (b & c));

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

/// Shared SHA-224/SHA-256 streaming state.
#[derive(Clone)]
struct Core {
  state: [u32; 8],
  buffer: BlockBuffer<BLOCK_LEN>,
}

impl Core {
  #[inline]
  const fn new(iv: [u32; 8]) -> Self {
    Self { state: iv, buffer: BlockBuffer::new() }
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    let state = &mut self.state;
    self.buffer.update(data, |block| compress_block(state, block));
  }

  /// Pad a copy of the state and serialize the first `N` bytes.
  fn finalize<const N: usize>(&self) -> [u8; N] {
    let mut state = self.state;
    let bit_len = self.buffer.total_len().wrapping_mul(8);
    self.buffer.finish_md(&bit_len.to_be_bytes(), |block| compress_block(&mut state, block));

    let mut full = [0u8; 32];
    let (chunks, _) = full.as_chunks_mut::<4>();
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

macro_rules! sha256_family {
  ($(#[$meta:meta])* $name:ident, $label:literal, $iv:expr, $out:literal) => {
    $(#[$meta])*
    #[derive(Clone)]
    pub struct $name(Core);

    impl Default for $name {
      #[inline]
      fn default() -> Self {
        Self(Core::new($iv))
      }
    }

    impl Digest for $name {
      const NAME: &'static str = $label;
      const BLOCK_SIZE: usize = BLOCK_LEN;
      const OUTPUT_SIZE: usize = $out;
      type Output = [u8; $out];

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
        self.0.finalize::<$out>()
      }

      #[inline]
      fn reset(&mut self) {
        *self = Self::default();
      }
    }

    impl Zeroize for $name {
      #[inline]
      fn zeroize(&mut self) {
        self.0.zeroize();
      }
    }
  };
}

sha256_family!(
  /// SHA-224 hasher.
  Sha224, "SHA-224", H224, 28
);
sha256_family!(
  /// SHA-256 hasher.
  Sha256, "SHA-256", H256, 32
);

#[cfg(test)]
mod tests {
  extern crate alloc;

  use traits::Digest;

  use super::{Sha224, Sha256};

  fn hex(bytes: &[u8]) -> alloc::string::String {
    use alloc::string::String;
    use core::fmt::Write;
    let mut s = String::new();
    for &b in bytes {
      write!(&mut s, "{:02x}", b).unwrap();
    }
    s
  }

  const TWO_BLOCK: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";

  #[test]
  fn sha256_known_vectors() {
    assert_eq!(
      hex(&Sha256::digest(b"")),
      "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(
      hex(&Sha256::digest(b"abc")),
      "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_eq!(
      hex(&Sha256::digest(TWO_BLOCK)),
      "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
    );
  }

  #[test]
  fn sha224_known_vectors() {
    assert_eq!(
      hex(&Sha224::digest(b"")),
      "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f"
    );
    assert_eq!(
      hex(&Sha224::digest(b"abc")),
      "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"
    );
    assert_eq!(
      hex(&Sha224::digest(TWO_BLOCK)),
      "75388b16512776cc5dba5da1fd890150b0c6455cb4f58b1952522525"
    );
  }

  #[test]
  fn sha256_million_a() {
    let data = alloc::vec![b'a'; 1_000_000];
    let mut h = Sha256::new();
    for chunk in data.chunks(997) {
      h.update(chunk);
    }
    assert_eq!(
      hex(&h.finalize()),
      "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
    );
  }

  #[test]
  fn padding_boundaries_match_one_shot() {
    let data: alloc::vec::Vec<u8> = (0..200u32).map(|i| (i ^ 0x5a) as u8).collect();
    for len in [55usize, 56, 57, 63, 64, 65, 119, 120, 121, 128] {
      let mut h = Sha256::new();
      let (a, b) = data[..len].split_at(len / 3);
      h.update(a);
      h.update(b);
      assert_eq!(h.finalize(), Sha256::digest(&data[..len]), "len {len}");
    }
  }

  #[test]
  fn metadata() {
    assert_eq!(Sha224::NAME, "SHA-224");
    assert_eq!(Sha224::OUTPUT_SIZE, 28);
    assert_eq!(Sha224::output_bits(), 224);
    assert_eq!(Sha256::BLOCK_SIZE, 64);
  }
}
