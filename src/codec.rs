//! Bit-level base-N codec between byte buffers and alphabet-based strings.

use crate::Error;

/// 32-symbol alphabet: lowercase alphanumeric minus the visually ambiguous
/// `l`, `o`, `v`, and `z`.
pub const ENC32_ALPHABET: &[u8; 32] = b"0123456789abcdefghijkmnpqrstuwxy";

/// 64-symbol alphabet ordered `-`, `.`, digits, uppercase, lowercase, so
/// that encoded strings sort like the underlying bytes in ASCII.
pub const ENC64_ALPHABET: &[u8; 64] =
    b"-.0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Bits consumed per symbol: `ceil(log2(alphabet size))`.
fn bits_per_symbol(alphabet_len: usize) -> usize {
    alphabet_len.next_power_of_two().trailing_zeros() as usize
}

/// Encodes a byte buffer as a string over the given alphabet.
///
/// The buffer is walked as a contiguous bitstream most-significant-bit
/// first, one symbol per `bits_per_symbol` bits. When the bitstream length
/// does not divide evenly, the final symbol carries the remaining bits
/// right-aligned. Output length is `ceil(8 * src.len() / bits)`.
///
/// # Examples
///
/// ```rust
/// use uuid4asc::codec::{base_x_encode, ENC32_ALPHABET};
///
/// assert_eq!(base_x_encode(&[0xff], ENC32_ALPHABET), "y7");
/// ```
pub fn base_x_encode(src: &[u8], alphabet: &[u8]) -> String {
    let bits = bits_per_symbol(alphabet.len());
    let total_bits = src.len() * 8;
    let mask = 0xffu16 >> (8 - bits);
    let mut result = String::with_capacity(total_bits.div_ceil(bits));
    let mut i = 0;
    while i < total_bits {
        let bo = i / 8;
        let io = i % 8;
        // remaining unused bits in the byte (negative if the symbol crosses
        // the byte boundary)
        let bon = 8i32 - (io + bits) as i32;
        let v = if bon < 0 {
            if bo < src.len() - 1 {
                let w = (u16::from(src[bo]) << 8) | u16::from(src[bo + 1]);
                (w >> (8 + bon)) & mask
            } else {
                // crossing the boundary but no more bytes: the remaining
                // bits, right-aligned
                u16::from(src[bo] & (0xff >> io))
            }
        } else {
            (u16::from(src[bo]) >> bon) & mask
        };
        result.push(alphabet[usize::from(v)] as char);
        i += bits;
    }
    result
}

/// Decodes a string over the given alphabet back into a byte buffer.
///
/// Each symbol contributes `bits_per_symbol` bits, placed sequentially into
/// an output buffer that grows as needed. Characters outside the alphabet
/// fail with [`Error::InvalidEncodingCharacter`]. The final symbol's bits
/// are ORed in right-aligned without validating its padding, so a non-zero
/// pad is absorbed rather than rejected.
pub fn base_x_decode(src: &str, alphabet: &[u8]) -> Result<Vec<u8>, Error> {
    let bits = bits_per_symbol(alphabet.len());
    let len = src.chars().count();
    let mut result: Vec<u8> = Vec::with_capacity((len * bits) / 8 + 1);
    let mut out_bit = 0usize;
    for (i, c) in src.chars().enumerate() {
        let v = alphabet
            .iter()
            .position(|&a| a as char == c)
            .ok_or(Error::InvalidEncodingCharacter { character: c })? as u16;
        let bo = out_bit / 8;
        let io = out_bit % 8;
        if bo >= result.len() {
            result.push(0);
        }
        let bon = 8i32 - (io + bits) as i32;
        if i < len - 1 || bon >= 0 {
            if bon < 0 {
                result[bo] |= (v >> -bon) as u8;
                result.push(((v << (8 + bon)) & 0xff) as u8);
            } else {
                result[bo] |= (v << bon) as u8;
            }
        } else {
            result[bo] |= v as u8;
        }
        out_bit += bits;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::{base_x_decode, base_x_encode, ENC32_ALPHABET, ENC64_ALPHABET};
    use crate::Error;

    const SAMPLE: [u8; 16] = [
        0xbe, 0x0c, 0x8b, 0x75, 0x3c, 0x09, 0x48, 0xe6, 0x96, 0x53, 0xb1, 0x49, 0xdb, 0x65, 0x5c,
        0xad,
    ];

    /// Encodes the fixed sample to both documented alphabets
    #[test]
    fn encodes_fixed_sample_to_both_alphabets() {
        assert_eq!(
            base_x_encode(&SAMPLE, ENC32_ALPHABET),
            "pq68nw9u154ed5ijn54wnraum5"
        );
        assert_eq!(
            base_x_encode(&SAMPLE, ENC64_ALPHABET),
            "jUm9RHk7GCOKIv37qqJQf."
        );
    }

    /// Produces the expected output lengths for 16-byte input
    #[test]
    fn produces_expected_output_lengths() {
        assert_eq!(base_x_encode(&SAMPLE, ENC32_ALPHABET).len(), 26);
        assert_eq!(base_x_encode(&SAMPLE, ENC64_ALPHABET).len(), 22);
    }

    /// Round-trips assorted 16-byte buffers through both alphabets
    #[test]
    fn round_trips_assorted_buffers() {
        let cases: &[[u8; 16]] = &[
            [0u8; 16],
            [0xff; 16],
            SAMPLE,
            [
                0x01, 0x80, 0xae, 0x59, 0x07, 0x8c, 0x7b, 0x80, 0xb1, 0x13, 0x2f, 0xe1, 0x4a,
                0x61, 0x5f, 0xb3,
            ],
            [
                0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                0x00, 0x00, 0x01,
            ],
        ];
        for bytes in cases {
            for alphabet in [&ENC32_ALPHABET[..], &ENC64_ALPHABET[..]] {
                let encoded = base_x_encode(bytes, alphabet);
                assert_eq!(base_x_decode(&encoded, alphabet).unwrap(), bytes);
            }
        }
    }

    /// Rejects characters outside the alphabet
    #[test]
    fn rejects_characters_outside_the_alphabet() {
        assert_eq!(
            base_x_decode("pq68nw9u154ed5ijn54wnraumL", ENC32_ALPHABET),
            Err(Error::InvalidEncodingCharacter { character: 'L' })
        );
        assert_eq!(
            base_x_decode("jUm9RHk7GCOKIv37qqJQf,", ENC64_ALPHABET),
            Err(Error::InvalidEncodingCharacter { character: ',' })
        );
    }

    /// Encodes the nil buffer to all-zero symbols
    #[test]
    fn encodes_nil_buffer_to_zero_symbols() {
        assert_eq!(
            base_x_encode(&[0u8; 16], ENC32_ALPHABET),
            "00000000000000000000000000"
        );
        assert_eq!(
            base_x_encode(&[0u8; 16], ENC64_ALPHABET),
            "----------------------"
        );
    }

    /// Decodes the empty string to the empty buffer
    #[test]
    fn decodes_empty_string_to_empty_buffer() {
        assert_eq!(base_x_decode("", ENC32_ALPHABET).unwrap(), Vec::<u8>::new());
    }
}
