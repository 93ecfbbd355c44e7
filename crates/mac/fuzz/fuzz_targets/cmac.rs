#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mac::{Cmac, Mac as _, MacReset as _, aes::Aes128};

#[derive(Arbitrary, Debug)]
struct Input {
  key: [u8; 16],
  data: Vec<u8>,
  chunk_sizes: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let expected = {
    use cmac::Mac;
    let mut m = cmac::Cmac::<aes::Aes128>::new_from_slice(&input.key).unwrap();
    m.update(&input.data);
    m.finalize().into_bytes()
  };

  let mut m = Cmac::<Aes128>::new(&input.key).unwrap();
  let mut offset = 0;
  let mut idx = 0;
  while offset < input.data.len() {
    let step = match input.chunk_sizes.get(idx % input.chunk_sizes.len().max(1)) {
      Some(&n) => (n as usize).max(1),
      None => 1,
    };
    let end = (offset + step).min(input.data.len());
    m.update(&input.data[offset..end]);
    offset = end;
    idx += 1;
  }
  assert_eq!(&m.finalize_reset()[..], &expected[..]);

  m.update(&input.data);
  assert_eq!(&m.finalize()[..], &expected[..]);
});
