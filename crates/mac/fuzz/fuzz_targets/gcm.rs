//! AES-GCM against the `aes-gcm` crate, plus open-after-seal and tamper checks.

#![no_main]

use aes_gcm::{AeadInPlace, KeyInit, aead::generic_array::GenericArray};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mac::{Gcm, aes::Aes128};

#[derive(Arbitrary, Debug)]
struct Input {
  key: [u8; 16],
  nonce: [u8; 12],
  aad: Vec<u8>,
  plaintext: Vec<u8>,
  flip: u16,
}

fuzz_target!(|input: Input| {
  let gcm = Gcm::<Aes128>::new(&input.key).unwrap();
  let mut ct = input.plaintext.clone();
  let tag = gcm.encrypt_in_place_detached(&input.nonce, &input.aad, &mut ct).unwrap();

  let reference = aes_gcm::Aes128Gcm::new_from_slice(&input.key).unwrap();
  let mut expected = input.plaintext.clone();
  let expected_tag = reference
    .encrypt_in_place_detached(GenericArray::from_slice(&input.nonce), &input.aad, &mut expected)
    .unwrap();
  assert_eq!(ct, expected);
  assert_eq!(&tag[..], &expected_tag[..]);

  if !ct.is_empty() {
    let mut bad = ct.clone();
    let bit = input.flip as usize % (bad.len() * 8);
    bad[bit / 8] ^= 1 << (bit % 8);
    let snapshot = bad.clone();
    assert!(gcm.decrypt_in_place_detached(&input.nonce, &input.aad, &mut bad, &tag).is_err());
    assert_eq!(bad, snapshot);
  }

  gcm.decrypt_in_place_detached(&input.nonce, &input.aad, &mut ct, &tag).unwrap();
  assert_eq!(ct, input.plaintext);
});
