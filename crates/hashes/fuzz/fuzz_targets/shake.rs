#![no_main]

use hashes::crypto::{Shake128, Shake256};
use libfuzzer_sys::fuzz_target;
use traits::{Xof, XofReader as _};

fn parse_u16_le(input: &[u8]) -> u16 {
  match input.len() {
    0 => 0,
    1 => input[0] as u16,
    _ => u16::from_le_bytes([input[0], input[1]]),
  }
}

fuzz_target!(|input: &[u8]| {
  // 2 bytes output length, 1 byte squeeze split, rest is the message.
  let out_len = (parse_u16_le(input) as usize) % 2049;
  let split_out = if out_len == 0 {
    0usize
  } else {
    input.get(2).copied().unwrap_or(0) as usize % (out_len + 1)
  };
  let data = input.get(3..).unwrap_or(&[]);
  let split_data = if data.is_empty() { 0 } else { (data[0] as usize) % (data.len() + 1) };
  let (a, b) = data.split_at(split_data);

  {
    let mut ours = vec![0u8; out_len];
    Shake128::hash_into(data, &mut ours);

    let mut h = Shake128::default();
    h.absorb(a).unwrap();
    h.absorb(b).unwrap();
    let mut reader = h.finalize_xof();
    let mut detached = vec![0u8; out_len];
    reader.squeeze(&mut detached[..split_out]);
    reader.squeeze(&mut detached[split_out..]);
    assert_eq!(ours, detached);

    let mut streamed = vec![0u8; out_len];
    h.squeeze(&mut streamed[..split_out]);
    assert!(h.absorb(b"late").is_err());
    h.squeeze(&mut streamed[split_out..]);
    assert_eq!(ours, streamed);

    use sha3::digest::{ExtendableOutput, Update, XofReader};
    let mut hh = sha3::Shake128::default();
    hh.update(data);
    let mut expected = vec![0u8; out_len];
    hh.finalize_xof().read(&mut expected);
    assert_eq!(ours, expected);
  }

  {
    let mut ours = vec![0u8; out_len];
    Shake256::hash_into(data, &mut ours);

    let mut h = Shake256::default();
    h.absorb(a).unwrap();
    h.absorb(b).unwrap();
    let mut streamed = vec![0u8; out_len];
    h.squeeze(&mut streamed[..split_out]);
    h.squeeze(&mut streamed[split_out..]);
    assert_eq!(ours, streamed);

    use sha3::digest::{ExtendableOutput, Update, XofReader};
    let mut hh = sha3::Shake256::default();
    hh.update(data);
    let mut expected = vec![0u8; out_len];
    hh.finalize_xof().read(&mut expected);
    assert_eq!(ours, expected);
  }
});
