use hashes::registry::{Algorithm, new_digest};
use proptest::prelude::*;

fn reference(alg: Algorithm, data: &[u8]) -> Vec<u8> {
  use sha2::Digest as _;
  match alg {
    Algorithm::Ripemd160 => {
      use ripemd::Digest as _;
      ripemd::Ripemd160::digest(data).to_vec()
    }
    Algorithm::Sha224 => sha2::Sha224::digest(data).to_vec(),
    Algorithm::Sha256 => sha2::Sha256::digest(data).to_vec(),
    Algorithm::Sha384 => sha2::Sha384::digest(data).to_vec(),
    Algorithm::Sha512 => sha2::Sha512::digest(data).to_vec(),
    Algorithm::Sha3_256 => sha3::Sha3_256::digest(data).to_vec(),
    Algorithm::Sha3_512 => sha3::Sha3_512::digest(data).to_vec(),
    Algorithm::Shake128 | Algorithm::Shake256 => {
      use sha3::digest::{ExtendableOutput, Update, XofReader};
      let mut out = vec![0u8; alg.output_size()];
      if alg == Algorithm::Shake128 {
        let mut h = sha3::Shake128::default();
        h.update(data);
        h.finalize_xof().read(&mut out);
      } else {
        let mut h = sha3::Shake256::default();
        h.update(data);
        h.finalize_xof().read(&mut out);
      }
      out
    }
  }
}

proptest! {
  #[test]
  fn every_registered_digest_matches_reference(
    data in proptest::collection::vec(any::<u8>(), 0..2048),
    pick in any::<prop::sample::Index>(),
  ) {
    let alg = *pick.get(Algorithm::ALL);
    let mut d = new_digest(&alg.as_str().to_lowercase()).unwrap();

    let mut i = 0usize;
    while i < data.len() {
      let step = (data[i] as usize % 97) + 1;
      let end = core::cmp::min(data.len(), i + step);
      d.update(&data[i..end]).unwrap();
      i = end;
    }

    let mut out = vec![0u8; d.output_size() + 3];
    let written = d.finalize_into(&mut out).unwrap();
    prop_assert_eq!(written, alg.output_size());
    let expected = reference(alg, &data);
    prop_assert_eq!(&out[..written], expected.as_slice());
  }
}

#[test]
fn blake3_is_not_registered() {
  assert_eq!(new_digest("BLAKE3").err(), Some(traits::Error::UnknownAlgorithm));
}
