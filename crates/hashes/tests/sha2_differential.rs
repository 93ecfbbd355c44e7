use hashes::crypto::{Sha224, Sha256, Sha384, Sha512};
use proptest::prelude::*;
use traits::Digest;

fn reference<D: sha2::Digest>(data: &[u8]) -> Vec<u8> {
  D::digest(data).to_vec()
}

fn streamed<D: Digest>(data: &[u8]) -> Vec<u8> {
  let mut h = D::new();
  let mut i = 0usize;
  while i < data.len() {
    let step = (data[i] as usize % 97) + 1;
    let end = core::cmp::min(data.len(), i + step);
    h.update(&data[i..end]);
    i = end;
  }
  h.finalize().as_ref().to_vec()
}

proptest! {
  #[test]
  fn sha224_matches_sha2(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    prop_assert_eq!(Sha224::digest(&data).to_vec(), reference::<sha2::Sha224>(&data));
    prop_assert_eq!(streamed::<Sha224>(&data), reference::<sha2::Sha224>(&data));
  }

  #[test]
  fn sha256_matches_sha2(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    prop_assert_eq!(Sha256::digest(&data).to_vec(), reference::<sha2::Sha256>(&data));
    prop_assert_eq!(streamed::<Sha256>(&data), reference::<sha2::Sha256>(&data));
  }

  #[test]
  fn sha384_matches_sha2(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    prop_assert_eq!(Sha384::digest(&data).to_vec(), reference::<sha2::Sha384>(&data));
    prop_assert_eq!(streamed::<Sha384>(&data), reference::<sha2::Sha384>(&data));
  }

  #[test]
  fn sha512_matches_sha2(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    prop_assert_eq!(Sha512::digest(&data).to_vec(), reference::<sha2::Sha512>(&data));
    prop_assert_eq!(streamed::<Sha512>(&data), reference::<sha2::Sha512>(&data));
  }

  #[test]
  fn vectored_update_matches_contiguous(
    a in proptest::collection::vec(any::<u8>(), 0..300),
    b in proptest::collection::vec(any::<u8>(), 0..300),
    c in proptest::collection::vec(any::<u8>(), 0..300),
  ) {
    let joined = [a.as_slice(), b.as_slice(), c.as_slice()].concat();
    prop_assert_eq!(Sha512::digest_vectored(&[a.as_slice(), b.as_slice(), c.as_slice()]), Sha512::digest(&joined));
  }
}
