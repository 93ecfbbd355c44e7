#![cfg(feature = "aes")]

use aes_gcm::{
  AeadInPlace, AesGcm, KeyInit as _,
  aead::{consts::U8, generic_array::GenericArray},
};
use hashes::crypto::{Ripemd160, Sha3_256, Sha256, Sha512};
use mac::{
  Cmac, DynHmac, Gcm, Gmac, Hmac, Poly1305,
  aes::{Aes128, Aes256},
};
use proptest::prelude::*;

fn chunked<M: mac::Mac>(mut m: M, data: &[u8]) -> M::Tag {
  let mut i = 0usize;
  while i < data.len() {
    let step = (data[i] as usize % 97) + 1;
    let end = core::cmp::min(data.len(), i + step);
    m.update(&data[i..end]);
    i = end;
  }
  m.finalize()
}

macro_rules! reference_hmac {
  ($digest:ty, $key:expr, $data:expr) => {{
    use hmac::Mac;
    let mut m = <hmac::Hmac<$digest> as Mac>::new_from_slice($key).unwrap();
    m.update($data);
    m.finalize().into_bytes().to_vec()
  }};
}

proptest! {
  #[test]
  fn hmac_sha256_matches_hmac_crate(
    key in proptest::collection::vec(any::<u8>(), 0..200),
    data in proptest::collection::vec(any::<u8>(), 0..2048),
  ) {
    let expected = reference_hmac!(sha2::Sha256, &key, &data);
    prop_assert_eq!(Hmac::<Sha256>::mac(&key, &data).to_vec(), expected.clone());
    prop_assert_eq!(chunked(Hmac::<Sha256>::new(&key), &data).to_vec(), expected);
  }

  #[test]
  fn hmac_sha512_matches_hmac_crate(
    key in proptest::collection::vec(any::<u8>(), 0..300),
    data in proptest::collection::vec(any::<u8>(), 0..2048),
  ) {
    prop_assert_eq!(Hmac::<Sha512>::mac(&key, &data).to_vec(), reference_hmac!(sha2::Sha512, &key, &data));
  }

  #[test]
  fn hmac_ripemd160_matches_hmac_crate(
    key in proptest::collection::vec(any::<u8>(), 0..200),
    data in proptest::collection::vec(any::<u8>(), 0..2048),
  ) {
    let expected = reference_hmac!(ripemd::Ripemd160, &key, &data);
    prop_assert_eq!(chunked(Hmac::<Ripemd160>::new(&key), &data).to_vec(), expected);
  }

  #[test]
  fn hmac_sha3_matches_hmac_crate(
    key in proptest::collection::vec(any::<u8>(), 0..300),
    data in proptest::collection::vec(any::<u8>(), 0..2048),
  ) {
    let expected = reference_hmac!(sha3::Sha3_256, &key, &data);
    prop_assert_eq!(Hmac::<Sha3_256>::mac(&key, &data).to_vec(), expected);
  }

  #[test]
  fn dyn_hmac_matches_static(
    key in proptest::collection::vec(any::<u8>(), 0..200),
    data in proptest::collection::vec(any::<u8>(), 0..1024),
  ) {
    let mut h = DynHmac::new("RIPEMD-160", &key).unwrap();
    let mut out = [0u8; 20];
    prop_assert_eq!(h.compute(&data, &mut out), Ok(20));
    prop_assert_eq!(out, Hmac::<Ripemd160>::mac(&key, &data));
  }

  #[test]
  fn cmac_matches_cmac_crate(
    key in proptest::array::uniform32(any::<u8>()),
    data in proptest::collection::vec(any::<u8>(), 0..1024),
  ) {
    use cmac::Mac;
    let mut reference = <cmac::Cmac<aes::Aes256> as Mac>::new_from_slice(&key).unwrap();
    reference.update(&data);
    let expected = reference.finalize().into_bytes().to_vec();

    prop_assert_eq!(Cmac::<Aes256>::mac(&key, &data).unwrap().to_vec(), expected.clone());
    prop_assert_eq!(chunked(Cmac::<Aes256>::new(&key).unwrap(), &data).to_vec(), expected);
  }

  #[test]
  fn poly1305_matches_poly1305_crate(
    key in proptest::array::uniform32(any::<u8>()),
    data in proptest::collection::vec(any::<u8>(), 0..1024),
  ) {
    let expected = poly1305::Poly1305::new(poly1305::Key::from_slice(&key)).compute_unpadded(&data).to_vec();

    prop_assert_eq!(Poly1305::mac(&key, &data).to_vec(), expected.clone());
    prop_assert_eq!(chunked(Poly1305::from_key(&key), &data).to_vec(), expected);
  }

  #[test]
  fn gcm_matches_aes_gcm(
    key in proptest::array::uniform16(any::<u8>()),
    nonce in proptest::array::uniform12(any::<u8>()),
    aad in proptest::collection::vec(any::<u8>(), 0..128),
    plaintext in proptest::collection::vec(any::<u8>(), 0..512),
  ) {
    let reference = aes_gcm::Aes128Gcm::new_from_slice(&key).unwrap();
    let mut expected = plaintext.clone();
    let expected_tag = reference
      .encrypt_in_place_detached(GenericArray::from_slice(&nonce), &aad, &mut expected)
      .unwrap();

    let gcm = Gcm::<Aes128>::new(&key).unwrap();
    let mut buf = plaintext.clone();
    let tag = gcm.encrypt_in_place_detached(&nonce, &aad, &mut buf).unwrap();
    prop_assert_eq!(&buf, &expected);
    prop_assert_eq!(tag.to_vec(), expected_tag.to_vec());

    gcm.decrypt_in_place_detached(&nonce, &aad, &mut buf, &tag).unwrap();
    prop_assert_eq!(buf, plaintext);
  }

  #[test]
  fn gmac_short_nonce_matches_aes_gcm(
    key in proptest::array::uniform16(any::<u8>()),
    nonce in proptest::array::uniform8(any::<u8>()),
    aad in proptest::collection::vec(any::<u8>(), 0..256),
  ) {
    let reference = AesGcm::<aes::Aes128, U8>::new_from_slice(&key).unwrap();
    let expected = reference.encrypt_in_place_detached(GenericArray::from_slice(&nonce), &aad, &mut []).unwrap();

    prop_assert_eq!(Gmac::<Aes128>::mac(&key, &nonce, &aad).unwrap().to_vec(), expected.to_vec());
    prop_assert_eq!(chunked(Gmac::<Aes128>::new(&key, &nonce).unwrap(), &aad).to_vec(), expected.to_vec());
  }

  #[test]
  fn gcm_rejects_single_bit_flips(
    key in proptest::array::uniform16(any::<u8>()),
    nonce in proptest::array::uniform12(any::<u8>()),
    aad in proptest::collection::vec(any::<u8>(), 1..64),
    plaintext in proptest::collection::vec(any::<u8>(), 1..256),
    pick in any::<prop::sample::Index>(),
    bit in 0u8..8,
  ) {
    let gcm = Gcm::<Aes128>::new(&key).unwrap();
    let mut ct = plaintext.clone();
    let tag = gcm.encrypt_in_place_detached(&nonce, &aad, &mut ct).unwrap();

    let mut bad_ct = ct.clone();
    bad_ct[pick.index(ct.len())] ^= 1 << bit;
    prop_assert!(gcm.decrypt_in_place_detached(&nonce, &aad, &mut bad_ct.clone(), &tag).is_err());

    let mut bad_tag = tag;
    bad_tag[pick.index(16)] ^= 1 << bit;
    prop_assert!(gcm.decrypt_in_place_detached(&nonce, &aad, &mut ct.clone(), &bad_tag).is_err());

    let mut bad_nonce = nonce;
    bad_nonce[pick.index(12)] ^= 1 << bit;
    prop_assert!(gcm.decrypt_in_place_detached(&bad_nonce, &aad, &mut ct.clone(), &tag).is_err());

    let mut bad_aad = aad.clone();
    bad_aad[pick.index(aad.len())] ^= 1 << bit;
    prop_assert!(gcm.decrypt_in_place_detached(&nonce, &bad_aad, &mut ct.clone(), &tag).is_err());

    let mut good = ct.clone();
    prop_assert!(gcm.decrypt_in_place_detached(&nonce, &aad, &mut good, &tag).is_ok());
    prop_assert_eq!(good, plaintext);
  }
}
