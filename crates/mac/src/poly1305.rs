//! Poly1305 one-time authenticator (RFC 8439 §2.5).
//!
//! The accumulator `h` lives in three 64-bit limbs (`h0`, `h1` full, `h2`
//! holding the bits from 2^128 up). Multiplication by the clamped `r` uses
//! 64x64->128-bit products; because clamping clears the low two bits of `r1`,
//! `2^128 * r1` folds back as `r1 + (r1 >> 2)` (that is `5 * r1 / 4`) modulo
//! `2^130 - 5`.
//!
//! A key must never authenticate two different messages. [`Mac::finalize`]
//! consumes the instance and there is no `reset`.

use traits::{Error, Mac};
use zeroize::Zeroize;

use hashes::BlockBuffer;

/// Key size in bytes.
pub const KEY_SIZE: usize = 32;
/// Tag size in bytes.
pub const TAG_SIZE: usize = 16;

const BLOCK_LEN: usize = 16;

const R0_CLAMP: u64 = 0x0fff_fffc_0fff_ffff;
const R1_CLAMP: u64 = 0x0fff_fffc_0fff_fffc;

/// Poly1305 keyed with a 32-byte one-time key.
#[derive(Clone)]
pub struct Poly1305 {
  r: [u64; 2],
  s: [u64; 2],
  h: [u64; 3],
  buffer: BlockBuffer<BLOCK_LEN>,
}

/// The `i`-th little-endian 64-bit word of `bytes`.
#[inline(always)]
fn le_u64<const N: usize>(bytes: &[u8; N], i: usize) -> u64 {
  let (words, _) = bytes.as_chunks::<8>();
  words.get(i).map_or(0, |w| u64::from_le_bytes(*w))
}

/// Fold the bits at 2^130 and above back into the low limbs (times 5).
#[inline(always)]
fn fold(h: &mut [u64; 3]) {
  let c = (h[2] >> 2) + (h[2] & !3);
  h[2] &= 3;
  let (h0, carry) = h[0].overflowing_add(c);
  let (h1, carry) = h[1].overflowing_add(u64::from(carry));
  h[0] = h0;
  h[1] = h1;
  h[2] += u64::from(carry);
}

impl Poly1305 {
  /// Key a new instance.
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidKeyLength`] unless `key` is exactly 32 bytes.
  pub fn new(key: &[u8]) -> Result<Self, Error> {
    let key: &[u8; KEY_SIZE] = key.try_into().map_err(|_| Error::InvalidKeyLength { actual: key.len() })?;
    Ok(Self::from_key(key))
  }

  /// Key a new instance from a fixed-size key.
  #[must_use]
  pub fn from_key(key: &[u8; KEY_SIZE]) -> Self {
    Self {
      r: [le_u64(key, 0) & R0_CLAMP, le_u64(key, 1) & R1_CLAMP],
      s: [le_u64(key, 2), le_u64(key, 3)],
      h: [0; 3],
      buffer: BlockBuffer::new(),
    }
  }

  /// One-shot tag of `data` under `key`.
  #[must_use]
  pub fn mac(key: &[u8; KEY_SIZE], data: &[u8]) -> [u8; TAG_SIZE] {
    let mut p = Self::from_key(key);
    p.update(data);
    p.finalize()
  }

  /// Absorb one 16-byte block; `hibit` is 1 for full blocks and 0 for the
  /// padded final block (which already carries its `0x01` terminator).
  fn block(h: &mut [u64; 3], r: &[u64; 2], block: &[u8; BLOCK_LEN], hibit: u64) {
    let [r0, r1] = *r;
    let s1 = r1 + (r1 >> 2);

    // h += m
    let t = u128::from(h[0]) + u128::from(le_u64(block, 0));
    let h0 = t as u64;
    let t = u128::from(h[1]) + u128::from(le_u64(block, 1)) + (t >> 64);
    let h1 = t as u64;
    let h2 = h[2] + hibit + (t >> 64) as u64;

    // h *= r, with every product at 2^128 and above already folded by 5/4
    let d0 = u128::from(h0) * u128::from(r0) + u128::from(h1) * u128::from(s1);
    let d1 = u128::from(h0) * u128::from(r1) + u128::from(h1) * u128::from(r0) + u128::from(h2) * u128::from(s1);
    let h2 = h2 * r0;

    let d1 = d1 + (d0 >> 64);
    h[0] = d0 as u64;
    h[1] = d1 as u64;
    h[2] = h2 + (d1 >> 64) as u64;

    fold(h);
  }

  fn compute_tag(&mut self) -> [u8; TAG_SIZE] {
    let mut h = self.h;
    let pos = self.buffer.position();
    if pos != 0 {
      let mut last = self.buffer.zero_padded();
      if let Some(b) = last.get_mut(pos) {
        *b = 1;
      }
      Self::block(&mut h, &self.r, &last, 0);
      last.zeroize();
    }

    fold(&mut h);

    // g = h + 5; if g reaches 2^130 then h >= p and the result is g mod 2^130.
    let t = u128::from(h[0]) + 5;
    let g0 = t as u64;
    let t = u128::from(h[1]) + (t >> 64);
    let g1 = t as u64;
    let g2 = h[2] + (t >> 64) as u64;

    let mask = 0u64.wrapping_sub(g2 >> 2);
    let h0 = (h[0] & !mask) | (g0 & mask);
    let h1 = (h[1] & !mask) | (g1 & mask);

    // tag = (h + s) mod 2^128
    let t = u128::from(h0) + u128::from(self.s[0]);
    let t0 = t as u64;
    let t1 = h1.wrapping_add(self.s[1]).wrapping_add((t >> 64) as u64);

    h.zeroize();
    let mut tag = [0u8; TAG_SIZE];
    let (out, _) = tag.as_chunks_mut::<8>();
    for (dst, word) in out.iter_mut().zip([t0, t1]) {
      *dst = word.to_le_bytes();
    }
    tag
  }
}

impl Mac for Poly1305 {
  const TAG_SIZE: usize = TAG_SIZE;
  type Tag = [u8; TAG_SIZE];

  fn update(&mut self, data: &[u8]) {
    let (h, r) = (&mut self.h, &self.r);
    self.buffer.update(data, |block| Self::block(h, r, block, 1));
  }

  fn finalize(mut self) -> Self::Tag {
    self.compute_tag()
  }
}

impl Drop for Poly1305 {
  fn drop(&mut self) {
    self.r.zeroize();
    self.s.zeroize();
    self.h.zeroize();
    self.buffer.zeroize();
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::vec::Vec;

  use traits::{Error, Mac};

  use super::Poly1305;

  fn unhex(s: &str) -> Vec<u8> {
    (0..s.len()).step_by(2).map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap()).collect()
  }

  fn key(hex: &str) -> [u8; 32] {
    unhex(hex).try_into().unwrap()
  }

  #[test]
  fn rfc8439_section_2_5_2() {
    let k = key("85d6be7857556d337f4452fe42d506a80103808afb0db2fd4abff6af4149f51b");
    let tag = Poly1305::mac(&k, b"Cryptographic Forum Research Group");
    assert_eq!(tag.to_vec(), unhex("a8061dc1305136c6c22b8baf0c0127a9"));
  }

  #[test]
  fn zero_key_gives_zero_tag() {
    let k = [0u8; 32];
    for len in [0usize, 1, 15, 16, 17, 100] {
      let msg: Vec<u8> = (0..len).map(|i| i as u8 ^ 0xa7).collect();
      assert_eq!(Poly1305::mac(&k, &msg), [0u8; 16], "len {len}");
    }
  }

  // RFC 8439 appendix A.3, vectors exercising the final reduction.
  #[test]
  fn rfc8439_reduction_edge_cases() {
    let r2 = "0200000000000000000000000000000000000000000000000000000000000000";
    let r1 = "0100000000000000000000000000000000000000000000000000000000000000";
    let r2_s_ff = "02000000000000000000000000000000ffffffffffffffffffffffffffffffff";

    let cases: &[(&str, &str, &str)] = &[
      (r2, "ffffffffffffffffffffffffffffffff", "03000000000000000000000000000000"),
      (r2_s_ff, "02000000000000000000000000000000", "03000000000000000000000000000000"),
      (
        r1,
        "fffffffffffffffffffffffffffffffff0ffffffffffffffffffffffffffffff11000000000000000000000000000000",
        "05000000000000000000000000000000",
      ),
      (
        r1,
        "fffffffffffffffffffffffffffffffffbfefefefefefefefefefefefefefefe01010101010101010101010101010101",
        "00000000000000000000000000000000",
      ),
      (r2, "fdffffffffffffffffffffffffffffff", "faffffffffffffffffffffffffffffff"),
    ];
    for (k, msg, expected) in cases {
      let tag = Poly1305::mac(&key(k), &unhex(msg));
      assert_eq!(tag.to_vec(), unhex(expected), "msg {msg}");
    }
  }

  #[test]
  fn byte_by_byte_matches_one_shot() {
    let k = key("85d6be7857556d337f4452fe42d506a80103808afb0db2fd4abff6af4149f51b");
    let msg: Vec<u8> = (0..100u8).collect();
    for len in [0usize, 1, 15, 16, 17, 31, 32, 33, 100] {
      let mut p = Poly1305::from_key(&k);
      for b in &msg[..len] {
        p.update(core::slice::from_ref(b));
      }
      assert_eq!(p.finalize(), Poly1305::mac(&k, &msg[..len]), "len {len}");
    }
  }

  #[test]
  fn key_length_is_checked() {
    assert_eq!(Poly1305::new(&[0u8; 31]).err(), Some(Error::InvalidKeyLength { actual: 31 }));
    assert_eq!(Poly1305::new(&[]).err(), Some(Error::InvalidKeyLength { actual: 0 }));
    assert!(Poly1305::new(&[0u8; 32]).is_ok());
  }

  #[test]
  fn verify_is_full_length() {
    let k = key("85d6be7857556d337f4452fe42d506a80103808afb0db2fd4abff6af4149f51b");
    let tag = Poly1305::mac(&k, b"msg");

    let mut p = Poly1305::from_key(&k);
    p.update(b"msg");
    assert!(p.clone().verify(&tag).is_ok());
    assert!(p.clone().verify(&tag[..15]).is_err());
    let mut bad = tag;
    bad[15] ^= 0x80;
    assert!(p.verify(&bad).is_err());
  }
}
