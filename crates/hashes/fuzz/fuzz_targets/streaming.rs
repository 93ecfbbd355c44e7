//! Streaming updates over arbitrary chunkings must match the one-shot result
//! for every registered algorithm.

#![no_main]

use arbitrary::Arbitrary;
use hashes::registry::Algorithm;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  chunk_sizes: Vec<u16>,
}

fuzz_target!(|input: Input| {
  for alg in Algorithm::ALL {
    let mut expected = vec![0u8; alg.output_size()];
    let mut one_shot = alg.instantiate();
    one_shot.compute(&input.data, &mut expected).unwrap();

    let mut h = alg.instantiate();
    let mut offset = 0;
    let mut idx = 0;
    while offset < input.data.len() {
      let step = match input.chunk_sizes.get(idx % input.chunk_sizes.len().max(1)) {
        Some(&n) => (n as usize % 300).max(1),
        None => 1,
      };
      let end = (offset + step).min(input.data.len());
      h.update(&input.data[offset..end]).unwrap();
      offset = end;
      idx += 1;
    }
    let mut streamed = vec![0u8; alg.output_size()];
    h.finalize_into(&mut streamed).unwrap();
    assert_eq!(streamed, expected, "{alg} streaming mismatch");
  }
});
