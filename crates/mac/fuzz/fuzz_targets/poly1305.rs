#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mac::{Mac as _, Poly1305};

#[derive(Arbitrary, Debug)]
struct Input {
  key: [u8; 32],
  data: Vec<u8>,
  split: usize,
}

fuzz_target!(|input: Input| {
  let ours = Poly1305::mac(&input.key, &input.data);

  let split = input.split % (input.data.len() + 1);
  let (a, b) = input.data.split_at(split);
  let mut m = Poly1305::from_key(&input.key);
  m.update(a);
  m.update(b);
  assert_eq!(m.finalize(), ours);

  use poly1305::universal_hash::KeyInit;
  let expected = poly1305::Poly1305::new(poly1305::Key::from_slice(&input.key)).compute_unpadded(&input.data);
  assert_eq!(&ours[..], &expected[..]);
});
