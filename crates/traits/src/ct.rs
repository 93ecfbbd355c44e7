//! Constant-time tag comparison.

use subtle::ConstantTimeEq;

use crate::VerificationError;

/// Compare a computed tag against an expected one without short-circuiting.
///
/// Every byte of both tags is inspected regardless of where the first mismatch
/// occurs. A length mismatch fails immediately; tag lengths are public.
///
/// # Errors
///
/// Returns [`VerificationError`] when the tags differ.
#[inline]
pub fn verify_tag(computed: &[u8], expected: &[u8]) -> Result<(), VerificationError> {
  if bool::from(computed.ct_eq(expected)) {
    Ok(())
  } else {
    Err(VerificationError::new())
  }
}

#[cfg(test)]
mod tests {
  use super::verify_tag;

  #[test]
  fn equal_tags_verify() {
    let tag = [0xa5u8; 16];
    assert!(verify_tag(&tag, &tag).is_ok());
    assert!(verify_tag(&[], &[]).is_ok());
  }

  #[test]
  fn any_flipped_bit_fails() {
    let tag = [0x3cu8; 16];
    for byte in 0..tag.len() {
      for bit in 0..8 {
        let mut bad = tag;
        bad[byte] ^= 1 << bit;
        assert!(verify_tag(&tag, &bad).is_err(), "byte {byte} bit {bit}");
      }
    }
  }

  #[test]
  fn length_mismatch_fails() {
    assert!(verify_tag(&[0u8; 16], &[0u8; 15]).is_err());
    assert!(verify_tag(&[0u8; 16], &[]).is_err());
  }
}
