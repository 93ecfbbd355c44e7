//! Digest lookup by algorithm name.
//!
//! Names match case-insensitively, and `-`/`_` separators are optional, so
//! `"SHA-256"`, `"sha256"` and `"Sha_256"` all resolve to [`Algorithm::Sha256`].

use alloc::boxed::Box;

use traits::{Digest, DigestInstance, DynDigest, Error};

use crate::crypto::{
  Ripemd160, Sha3_256, Sha3_512, Sha224, Sha256, Sha384, Sha512, Shake128Digest, Shake256Digest,
};

/// Fixed output length of the registry's SHAKE128 instance.
pub const SHAKE128_OUTPUT_LEN: usize = 32;
/// Fixed output length of the registry's SHAKE256 instance.
pub const SHAKE256_OUTPUT_LEN: usize = 64;

/// Every digest the registry can construct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
  Ripemd160,
  Sha224,
  Sha256,
  Sha384,
  Sha512,
  Sha3_256,
  Sha3_512,
  Shake128,
  Shake256,
}

impl Algorithm {
  pub const ALL: &'static [Self] = &[
    Self::Ripemd160,
    Self::Sha224,
    Self::Sha256,
    Self::Sha384,
    Self::Sha512,
    Self::Sha3_256,
    Self::Sha3_512,
    Self::Shake128,
    Self::Shake256,
  ];

  /// Canonical name.
  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Ripemd160 => Ripemd160::NAME,
      Self::Sha224 => Sha224::NAME,
      Self::Sha256 => Sha256::NAME,
      Self::Sha384 => Sha384::NAME,
      Self::Sha512 => Sha512::NAME,
      Self::Sha3_256 => Sha3_256::NAME,
      Self::Sha3_512 => Sha3_512::NAME,
      Self::Shake128 => "SHAKE128",
      Self::Shake256 => "SHAKE256",
    }
  }

  /// Resolve a user-supplied name.
  #[must_use]
  pub fn from_name(name: &str) -> Option<Self> {
    Self::ALL.iter().copied().find(|alg| names_match(name, alg.as_str()))
  }

  /// Compression block size (sponge rate for SHA-3/SHAKE) in bytes.
  #[must_use]
  pub const fn block_size(self) -> usize {
    match self {
      Self::Ripemd160 => Ripemd160::BLOCK_SIZE,
      Self::Sha224 => Sha224::BLOCK_SIZE,
      Self::Sha256 => Sha256::BLOCK_SIZE,
      Self::Sha384 => Sha384::BLOCK_SIZE,
      Self::Sha512 => Sha512::BLOCK_SIZE,
      Self::Sha3_256 => Sha3_256::BLOCK_SIZE,
      Self::Sha3_512 => Sha3_512::BLOCK_SIZE,
      Self::Shake128 => Shake128Digest::<SHAKE128_OUTPUT_LEN>::BLOCK_SIZE,
      Self::Shake256 => Shake256Digest::<SHAKE256_OUTPUT_LEN>::BLOCK_SIZE,
    }
  }

  /// Output size in bytes.
  #[must_use]
  pub const fn output_size(self) -> usize {
    match self {
      Self::Ripemd160 => Ripemd160::OUTPUT_SIZE,
      Self::Sha224 => Sha224::OUTPUT_SIZE,
      Self::Sha256 => Sha256::OUTPUT_SIZE,
      Self::Sha384 => Sha384::OUTPUT_SIZE,
      Self::Sha512 => Sha512::OUTPUT_SIZE,
      Self::Sha3_256 => Sha3_256::OUTPUT_SIZE,
      Self::Sha3_512 => Sha3_512::OUTPUT_SIZE,
      Self::Shake128 => SHAKE128_OUTPUT_LEN,
      Self::Shake256 => SHAKE256_OUTPUT_LEN,
    }
  }

  /// A fresh boxed instance.
  #[must_use]
  pub fn instantiate(self) -> Box<dyn DynDigest + Send + Sync> {
    match self {
      Self::Ripemd160 => Box::new(DigestInstance::<Ripemd160>::new()),
      Self::Sha224 => Box::new(DigestInstance::<Sha224>::new()),
      Self::Sha256 => Box::new(DigestInstance::<Sha256>::new()),
      Self::Sha384 => Box::new(DigestInstance::<Sha384>::new()),
      Self::Sha512 => Box::new(DigestInstance::<Sha512>::new()),
      Self::Sha3_256 => Box::new(DigestInstance::<Sha3_256>::new()),
      Self::Sha3_512 => Box::new(DigestInstance::<Sha3_512>::new()),
      Self::Shake128 => Box::new(DigestInstance::<Shake128Digest<SHAKE128_OUTPUT_LEN>>::new()),
      Self::Shake256 => Box::new(DigestInstance::<Shake256Digest<SHAKE256_OUTPUT_LEN>>::new()),
    }
  }
}

impl core::fmt::Display for Algorithm {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl core::str::FromStr for Algorithm {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    lookup(s)
  }
}

/// Canonical names of every registered algorithm.
pub fn algorithms() -> impl Iterator<Item = &'static str> {
  Algorithm::ALL.iter().map(|alg| alg.as_str())
}

/// Construct a fresh digest instance by name.
///
/// # Errors
///
/// Returns [`Error::UnknownAlgorithm`] if `name` is not registered.
pub fn new_digest(name: &str) -> Result<Box<dyn DynDigest + Send + Sync>, Error> {
  lookup(name).map(Algorithm::instantiate)
}

fn lookup(name: &str) -> Result<Algorithm, Error> {
  match Algorithm::from_name(name) {
    Some(alg) => Ok(alg),
    None => {
      #[cfg(feature = "tracing")]
      tracing::debug!(name, "unknown digest algorithm");
      Err(Error::UnknownAlgorithm)
    }
  }
}

fn names_match(candidate: &str, canonical: &str) -> bool {
  let significant = |b: &u8| *b != b'-' && *b != b'_';
  let mut a = candidate.bytes().filter(significant);
  let mut b = canonical.bytes().filter(significant);
  loop {
    match (a.next(), b.next()) {
      (None, None) => return true,
      (Some(x), Some(y)) if x.eq_ignore_ascii_case(&y) => {}
      _ => return false,
    }
  }
}
