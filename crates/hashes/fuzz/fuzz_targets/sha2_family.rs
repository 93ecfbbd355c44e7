#![no_main]

use hashes::crypto::{Sha224, Sha256, Sha384, Sha512};
use libfuzzer_sys::fuzz_target;
use traits::Digest;

fn split_point(input: &[u8]) -> usize {
  if input.is_empty() {
    return 0;
  }
  (input[0] as usize) % (input.len() + 1)
}

fn check<D: Digest, R: sha2::Digest>(input: &[u8]) {
  let (a, b) = input.split_at(split_point(input));
  let ours = D::digest(input);
  let mut h = D::new();
  h.update(a);
  h.update(b);
  assert_eq!(h.finalize().as_ref(), ours.as_ref(), "{} split mismatch", D::NAME);
  assert_eq!(ours.as_ref(), &R::digest(input)[..], "{} reference mismatch", D::NAME);
}

fuzz_target!(|input: &[u8]| {
  check::<Sha224, sha2::Sha224>(input);
  check::<Sha256, sha2::Sha256>(input);
  check::<Sha384, sha2::Sha384>(input);
  check::<Sha512, sha2::Sha512>(input);
});
