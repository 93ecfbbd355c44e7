//! Block buffer engine shared by every streaming construction.
//!
//! A [`BlockBuffer`] owns a scratch block, a fill count, and a running byte
//! counter. Callers supply the per-block transform as a closure, so the same
//! buffering code drives RIPEMD-160, SHA-2, Keccak, CMAC, GHASH and Poly1305.
//!
//! Two absorb strategies are provided:
//!
//! - [`update`](BlockBuffer::update) compresses every block as soon as it is
//!   complete. After it returns, fewer than `N` bytes are pending.
//! - [`update_lazy`](BlockBuffer::update_lazy) never compresses a block until
//!   more input is known to follow it. After it returns on non-empty input,
//!   between 1 and `N` bytes are pending. CMAC needs this: its final block is
//!   transformed differently and must not go through the ordinary path.
//!
//! A given buffer must be driven by only one of the two strategies.

#![allow(clippy::indexing_slicing)] // `pos <= N` is maintained by every method

use zeroize::Zeroize;

/// Fixed-size pending-block buffer.
#[derive(Clone)]
pub struct BlockBuffer<const N: usize> {
  buf: [u8; N],
  pos: usize,
  total: u64,
}

impl<const N: usize> Default for BlockBuffer<N> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<const N: usize> BlockBuffer<N> {
  /// Block length in bytes.
  pub const BLOCK_LEN: usize = N;

  /// An empty buffer.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self { buf: [0u8; N], pos: 0, total: 0 }
  }

  /// Absorb `data`, compressing each block as soon as it is complete.
  ///
  /// Full blocks are handed to `compress` directly from `data` without
  /// copying; only a partial head (to complete a pending block) and a partial
  /// tail are copied through the scratch block.
  pub fn update(&mut self, mut data: &[u8], mut compress: impl FnMut(&[u8; N])) {
    self.total = self.total.wrapping_add(data.len() as u64);

    if self.pos != 0 {
      let take = core::cmp::min(N - self.pos, data.len());
      self.buf[self.pos..self.pos + take].copy_from_slice(&data[..take]);
      self.pos += take;
      data = &data[take..];

      if self.pos < N {
        return;
      }
      compress(&self.buf);
      self.pos = 0;
    }

    let (blocks, rest) = data.as_chunks::<N>();
    for block in blocks {
      compress(block);
    }

    self.buf[..rest.len()].copy_from_slice(rest);
    self.pos = rest.len();
  }

  /// Absorb `data`, holding back the last complete block.
  ///
  /// A block is compressed only once at least one more byte has arrived after
  /// it, so the true final block is always still pending at finalize time.
  pub fn update_lazy(&mut self, mut data: &[u8], mut compress: impl FnMut(&[u8; N])) {
    if data.is_empty() {
      return;
    }
    self.total = self.total.wrapping_add(data.len() as u64);

    // A held-back full block is now known not to be the last one.
    if self.pos == N {
      compress(&self.buf);
      self.pos = 0;
    }

    if self.pos != 0 {
      let take = core::cmp::min(N - self.pos, data.len());
      self.buf[self.pos..self.pos + take].copy_from_slice(&data[..take]);
      self.pos += take;
      data = &data[take..];

      if data.is_empty() {
        return;
      }
      compress(&self.buf);
      self.pos = 0;
    }

    // Keep 1..=N bytes back.
    let direct = (data.len() - 1) / N * N;
    let (head, tail) = data.split_at(direct);
    let (blocks, _) = head.as_chunks::<N>();
    for block in blocks {
      compress(block);
    }

    self.buf[..tail.len()].copy_from_slice(tail);
    self.pos = tail.len();
  }

  /// Bytes waiting for the next compression.
  #[inline]
  #[must_use]
  pub fn pending(&self) -> &[u8] {
    &self.buf[..self.pos]
  }

  /// Number of pending bytes.
  #[inline]
  #[must_use]
  pub const fn position(&self) -> usize {
    self.pos
  }

  /// Total bytes absorbed since construction or the last reset.
  #[inline]
  #[must_use]
  pub const fn total_len(&self) -> u64 {
    self.total
  }

  /// Pending bytes copied into a zero-filled block.
  #[inline]
  #[must_use]
  pub fn zero_padded(&self) -> [u8; N] {
    let mut block = [0u8; N];
    block[..self.pos].copy_from_slice(self.pending());
    block
  }

  /// Merkle–Damgård finalization over a copy of the pending block.
  ///
  /// Appends `0x80`, zero bytes, and `length` (already encoded in the
  /// algorithm's byte order) so the padded message is a multiple of `N`.
  /// Compresses one block, or two when fewer than `length.len() + 1` bytes
  /// of room remain. The buffer itself is left untouched.
  ///
  /// Must only be used with buffers driven by [`update`](Self::update).
  pub fn finish_md(&self, length: &[u8], mut compress: impl FnMut(&[u8; N])) {
    debug_assert!(self.pos < N);
    debug_assert!(length.len() < N);

    let length_at = N - length.len();
    let mut block = self.zero_padded();
    block[self.pos] = 0x80;

    if self.pos >= length_at {
      compress(&block);
      block.zeroize();
    }

    block[length_at..].copy_from_slice(length);
    compress(&block);
    block.zeroize();
  }

  /// Discard pending bytes and the byte counter.
  #[inline]
  pub fn reset(&mut self) {
    self.zeroize();
  }
}

impl<const N: usize> Zeroize for BlockBuffer<N> {
  fn zeroize(&mut self) {
    self.buf.zeroize();
    self.pos.zeroize();
    self.total.zeroize();
  }
}
