//! SHA-3 and SHAKE (FIPS 202).
//!
//! - [`Sha3_256`], [`Sha3_512`]: fixed-output digests.
//! - [`Shake128`], [`Shake256`]: extendable-output functions implementing
//!   [`Xof`]. The first squeeze ends absorption; [`finalize_xof`] instead
//!   hands out a detached reader and leaves the instance absorbing.
//! - [`Shake128Digest`], [`Shake256Digest`]: SHAKE truncated to `N` bytes,
//!   usable anywhere a [`Digest`] is expected (including HMAC).
//!
//! [`finalize_xof`]: Shake128::finalize_xof

use traits::{Digest, Error, Xof, XofReader};
use zeroize::Zeroize;

use super::keccak::{Sponge, SpongeReader};

const SHA3_DS: u8 = 0x06;
const SHAKE_DS: u8 = 0x1f;

macro_rules! sha3_digest {
  ($(#[$meta:meta])* $name:ident, $label:literal, $rate:literal, $out:literal) => {
    $(#[$meta])*
    #[derive(Clone, Default)]
    pub struct $name {
      sponge: Sponge<$rate>,
    }

    impl Digest for $name {
      const NAME: &'static str = $label;
      const BLOCK_SIZE: usize = $rate;
      const OUTPUT_SIZE: usize = $out;
      type Output = [u8; $out];

      #[inline]
      fn new() -> Self {
        Self::default()
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        self.sponge.absorb(data);
      }

      fn finalize(&self) -> Self::Output {
        let mut out = [0u8; $out];
        let mut reader = self.sponge.finalize(SHA3_DS);
        reader.squeeze(&mut out);
        reader.zeroize();
        out
      }

      #[inline]
      fn reset(&mut self) {
        self.sponge.reset();
      }
    }

    impl Zeroize for $name {
      #[inline]
      fn zeroize(&mut self) {
        self.sponge.zeroize();
      }
    }
  };
}

sha3_digest!(
  /// SHA3-256 hasher.
  Sha3_256, "SHA3-256", 136, 32
);
sha3_digest!(
  /// SHA3-512 hasher.
  Sha3_512, "SHA3-512", 72, 64
);

macro_rules! shake {
  (
    $(#[$meta:meta])* $name:ident,
    $(#[$rmeta:meta])* $reader:ident,
    $(#[$dmeta:meta])* $digest:ident,
    $label:literal, $rate:literal
  ) => {
    $(#[$meta])*
    #[derive(Clone, Default)]
    pub struct $name {
      sponge: Sponge<$rate>,
      reader: Option<SpongeReader<$rate>>,
    }

    impl $name {
      /// Detached output stream over the input absorbed so far.
      ///
      /// Does not end absorption on `self`.
      #[must_use]
      pub fn finalize_xof(&self) -> $reader {
        $reader(self.sponge.finalize(SHAKE_DS))
      }
    }

    impl Xof for $name {
      const NAME: &'static str = $label;
      const BLOCK_SIZE: usize = $rate;

      fn absorb(&mut self, data: &[u8]) -> Result<(), Error> {
        if self.reader.is_some() {
          return Err(Error::InvalidState("absorb after squeeze; call reset first"));
        }
        self.sponge.absorb(data);
        Ok(())
      }

      fn squeeze(&mut self, out: &mut [u8]) {
        let sponge = &self.sponge;
        self.reader.get_or_insert_with(|| sponge.finalize(SHAKE_DS)).squeeze(out);
      }

      #[inline]
      fn is_squeezing(&self) -> bool {
        self.reader.is_some()
      }

      fn reset(&mut self) {
        self.zeroize();
        self.reader = None;
      }
    }

    impl Zeroize for $name {
      fn zeroize(&mut self) {
        self.sponge.zeroize();
        if let Some(reader) = self.reader.as_mut() {
          reader.zeroize();
        }
      }
    }

    $(#[$rmeta])*
    #[derive(Clone)]
    pub struct $reader(SpongeReader<$rate>);

    impl XofReader for $reader {
      #[inline]
      fn squeeze(&mut self, out: &mut [u8]) {
        self.0.squeeze(out);
      }
    }

    impl Drop for $reader {
      fn drop(&mut self) {
        self.0.zeroize();
      }
    }

    $(#[$dmeta])*
    #[derive(Clone, Default)]
    pub struct $digest<const N: usize> {
      sponge: Sponge<$rate>,
    }

    impl<const N: usize> Digest for $digest<N> {
      const NAME: &'static str = $label;
      const BLOCK_SIZE: usize = $rate;
      const OUTPUT_SIZE: usize = N;
      type Output = [u8; N];

      #[inline]
      fn new() -> Self {
        Self::default()
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        self.sponge.absorb(data);
      }

      fn finalize(&self) -> Self::Output {
        let mut out = [0u8; N];
        let mut reader = self.sponge.finalize(SHAKE_DS);
        reader.squeeze(&mut out);
        reader.zeroize();
        out
      }

      #[inline]
      fn reset(&mut self) {
        self.sponge.reset();
      }
    }

    impl<const N: usize> Zeroize for $digest<N> {
      #[inline]
      fn zeroize(&mut self) {
        self.sponge.zeroize();
      }
    }
  };
}

shake!(
  /// SHAKE128 extendable-output function (rate 168).
  Shake128,
  /// Detached SHAKE128 output stream.
  Shake128Reader,
  /// SHAKE128 truncated to `N` output bytes.
  Shake128Digest,
  "SHAKE128", 168
);
shake!(
  /// SHAKE256 extendable-output function (rate 136).
  Shake256,
  /// Detached SHAKE256 output stream.
  Shake256Reader,
  /// SHAKE256 truncated to `N` output bytes.
  Shake256Digest,
  "SHAKE256", 136
);
