//! AES block-cipher adapters.
//!
//! Thin wrappers giving the RustCrypto `aes` crate the [`BlockCipher`] shape
//! CMAC, GMAC and GCM consume. Built with `aes/zeroize`, so round keys are
//! erased on drop.

use aes::cipher::{BlockEncrypt, KeyInit};
use traits::{BlockCipher, Error, cipher::Block};

macro_rules! aes_adapter {
  ($(#[$meta:meta])* $name:ident, $label:literal, $key_len:literal) => {
    $(#[$meta])*
    #[derive(Clone)]
    pub struct $name(aes::$name);

    impl BlockCipher for $name {
      const NAME: &'static str = $label;
      const KEY_SIZES: &'static [usize] = &[$key_len];

      fn new(key: &[u8]) -> Result<Self, Error> {
        aes::$name::new_from_slice(key).map(Self).map_err(|_| Error::InvalidKeyLength { actual: key.len() })
      }

      #[inline]
      fn encrypt_block(&self, block: &mut Block) {
        self.0.encrypt_block(aes::Block::from_mut_slice(block));
      }
    }
  };
}

aes_adapter!(
  /// AES with a 128-bit key.
  Aes128, "AES-128", 16
);
aes_adapter!(
  /// AES with a 192-bit key.
  Aes192, "AES-192", 24
);
aes_adapter!(
  /// AES with a 256-bit key.
  Aes256, "AES-256", 32
);
