#![no_main]

use hashes::crypto::Ripemd160;
use libfuzzer_sys::fuzz_target;
use traits::Digest as _;

fuzz_target!(|input: &[u8]| {
  let ours = Ripemd160::digest(input);

  let split = if input.is_empty() { 0 } else { (input[0] as usize) % (input.len() + 1) };
  let (a, b) = input.split_at(split);
  let mut h = Ripemd160::new();
  h.update(a);
  let snapshot = h.finalize();
  h.update(b);
  assert_eq!(ours, h.finalize());
  assert_eq!(snapshot, Ripemd160::digest(a));

  use ripemd::Digest as _;
  let expected = ripemd::Ripemd160::digest(input);
  assert_eq!(&ours[..], &expected[..]);
});
