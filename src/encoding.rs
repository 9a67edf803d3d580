//! Message encoding for NTRU
//!
//! Maps arbitrary bytes to ternary message polynomials and back.
//!
//! # Balanced-Ternary Encoding
//!
//! Three symbols cannot carry a byte in one coefficient, so each byte b is
//! written as the value v = b + 1 in [`DIGITS_PER_BYTE`] balanced-ternary
//! digits, least significant first:
//!
//! ```text
//! v = d_0 + 3·d_1 + 9·d_2 + ... + 243·d_5,   d_k ∈ {-1, 0, 1}
//! ```
//!
//! Six digits cover [-364, 364], so every v in [1, 256] has a representation
//! and the all-zero group (v = 0) never encodes data. The message digits are
//! followed by one all-zero end group, and the stream is cut into blocks of N
//! coefficients with the last block zero-padded. Decoding stops at the end
//! group and fails if the stream runs out before reaching it, so dropping
//! trailing blocks is always detected. Because v never is zero, trailing
//! 0x00 bytes in the message survive the round trip.
//!
//! An empty message encodes to the end group alone, a single all-zero block
//! for any N ≥ 6.

use crate::error::{NtruError, Result};
use crate::math::Poly;

/// Ternary digits used per message byte
pub const DIGITS_PER_BYTE: usize = 6;

/// Balanced-ternary digits of b + 1, least significant first
fn byte_to_digits(b: u8) -> [i64; DIGITS_PER_BYTE] {
    let mut v = b as i64 + 1;
    let mut digits = [0i64; DIGITS_PER_BYTE];
    for d in digits.iter_mut() {
        *d = match v.rem_euclid(3) {
            2 => -1,
            r => r,
        };
        v = (v - *d) / 3;
    }
    digits
}

fn digits_to_value(digits: &[i64]) -> i64 {
    digits.iter().rev().fold(0, |acc, &d| acc * 3 + d)
}

/// Number of blocks of degree `n` needed for a message of `len` bytes
pub fn block_count(len: usize, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    ((len + 1) * DIGITS_PER_BYTE).div_ceil(n)
}

/// Encode bytes into ternary polynomials of dimension `n`
///
/// # Example
///
/// ```
/// use ntru_lattice::encoding::{decode, encode};
///
/// let blocks = encode(b"HOLA", 11);
/// assert_eq!(blocks.len(), 3);
/// assert_eq!(decode(&blocks).unwrap(), b"HOLA");
/// ```
pub fn encode(message: &[u8], n: usize) -> Vec<Poly> {
    if n == 0 {
        return Vec::new();
    }
    let stream: Vec<i64> = message
        .iter()
        .flat_map(|&b| byte_to_digits(b))
        .chain([0; DIGITS_PER_BYTE])
        .collect();

    stream
        .chunks(n)
        .map(|chunk| {
            let mut coeffs = chunk.to_vec();
            coeffs.resize(n, 0);
            Poly::from_coeffs(coeffs)
        })
        .collect()
}

/// Decode ternary polynomials produced by [`encode`] back into bytes
///
/// Fails with [`NtruError::DecryptionNoiseOverflow`] if a coefficient is not
/// ternary, a digit group decodes outside the byte range, the end group is
/// missing, or nonzero digits follow it.
pub fn decode(blocks: &[Poly]) -> Result<Vec<u8>> {
    let stream: Vec<i64> = blocks
        .iter()
        .flat_map(|b| b.coeffs().iter().copied())
        .collect();

    if let Some(pos) = stream.iter().position(|c| !(-1..=1).contains(c)) {
        return Err(NtruError::DecryptionNoiseOverflow(format!(
            "coefficient {} at position {} is not ternary",
            stream[pos], pos
        )));
    }

    let mut out = Vec::with_capacity(stream.len() / DIGITS_PER_BYTE);
    let mut terminated = false;
    for group in stream.chunks_exact(DIGITS_PER_BYTE) {
        match digits_to_value(group) {
            0 => {
                terminated = true;
                break;
            }
            v @ 1..=256 => out.push((v - 1) as u8),
            v => {
                return Err(NtruError::DecryptionNoiseOverflow(format!(
                    "digit group {} decodes to {}, outside the byte range",
                    out.len(),
                    v
                )))
            }
        }
    }

    if !terminated {
        return Err(NtruError::DecryptionNoiseOverflow(format!(
            "message truncated after {} bytes, end group missing",
            out.len()
        )));
    }

    let consumed = (out.len() + 1) * DIGITS_PER_BYTE;
    if stream[consumed..].iter().any(|&c| c != 0) {
        return Err(NtruError::DecryptionNoiseOverflow(
            "nonzero coefficients after padding".into(),
        ));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_cover_every_byte() {
        for b in 0..=255u8 {
            let digits = byte_to_digits(b);
            assert!(digits.iter().all(|d| (-1..=1).contains(d)));
            assert_eq!(digits_to_value(&digits), b as i64 + 1);
            assert!(digits.iter().any(|&d| d != 0));
        }
    }

    #[test]
    fn test_known_digits() {
        // 'H' = 72, v = 73 = 1 + 0·3 - 1·9 + 0·27 + 1·81
        assert_eq!(byte_to_digits(b'H'), [1, 0, -1, 0, 1, 0]);
    }

    #[test]
    fn test_empty_message() {
        let blocks = encode(b"", 11);
        assert_eq!(blocks, vec![Poly::zero(11)]);
        assert_eq!(decode(&blocks).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_exact_block_fill() {
        // 2 bytes = 12 digits fill one block of n = 12; the end group spills
        let blocks = encode(&[0xff, 0x00], 12);
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].coeffs()[6..].iter().any(|&c| c != 0));
        assert!(blocks[1].is_zero());
        assert_eq!(decode(&blocks).unwrap(), vec![0xff, 0x00]);
        assert!(matches!(
            decode(&blocks[..1]),
            Err(NtruError::DecryptionNoiseOverflow(_))
        ));
    }

    #[test]
    fn test_truncated_stream_rejected() {
        let message = b"0123456789abcdefghijkl";
        let blocks = encode(message, 11);
        assert_eq!(blocks.len(), 13);
        for keep in 0..blocks.len() - 1 {
            assert!(decode(&blocks[..keep]).is_err(), "kept {} blocks", keep);
        }
        assert_eq!(decode(&blocks).unwrap(), message);
    }

    #[test]
    fn test_spans_blocks() {
        let message = b"HOLA";
        let blocks = encode(message, 11);
        assert_eq!(blocks.len(), block_count(message.len(), 11));
        assert!(blocks.iter().all(|b| b.dimension() == 11 && b.is_ternary()));
        assert_eq!(decode(&blocks).unwrap(), message);
    }

    #[test]
    fn test_trailing_zero_bytes_preserved() {
        let message = b"HOLA\0\0\0\0\0\0\0";
        let decoded = decode(&encode(message, 11)).unwrap();
        assert_eq!(decoded, message);
        assert_eq!(String::from_utf8(decoded).unwrap().trim_end_matches('\0'), "HOLA");
    }

    #[test]
    fn test_all_byte_values() {
        let message: Vec<u8> = (0..=255u8).collect();
        assert_eq!(decode(&encode(&message, 509)).unwrap(), message);
    }

    #[test]
    fn test_block_count() {
        assert_eq!(block_count(0, 11), 1);
        assert_eq!(block_count(4, 11), 3);
        assert_eq!(block_count(1, 12), 1);
        assert_eq!(block_count(2, 12), 2);
        assert_eq!(block_count(11, 11), 7);
    }

    #[test]
    fn test_rejects_non_ternary() {
        let blocks = vec![Poly::from_coeffs(vec![2, 0, 0, 0, 0, 0])];
        assert!(matches!(
            decode(&blocks),
            Err(NtruError::DecryptionNoiseOverflow(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_group() {
        // -1 is not a valid byte value
        let blocks = vec![Poly::from_coeffs(vec![-1, 0, 0, 0, 0, 0])];
        assert!(decode(&blocks).is_err());
        // 364 > 256
        let blocks = vec![Poly::from_coeffs(vec![1, 1, 1, 1, 1, 1])];
        assert!(decode(&blocks).is_err());
    }

    #[test]
    fn test_rejects_data_after_padding() {
        let mut coeffs = vec![0i64; 12];
        coeffs[7] = 1;
        assert!(decode(&[Poly::from_coeffs(coeffs)]).is_err());
    }
}
