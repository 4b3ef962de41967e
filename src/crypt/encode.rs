//! Shuffled crypt(3) base64 encoding of the final digest.
//!
//! Digest bytes are taken in the order given by a fixed per-algorithm
//! permutation, three at a time, and each group becomes four characters of
//! [`ALPHABET`], least significant six bits first.

use super::ALPHABET;

#[rustfmt::skip]
pub(crate) static SHA256_SHUFFLE: [usize; 32] = [
    20, 10,  0,
    11,  1, 21,
     2, 22, 12,
    23, 13,  3,
    14,  4, 24,
     5, 25, 15,
    26, 16,  6,
    17,  7, 27,
     8, 28, 18,
    29, 19,  9,
    30, 31,
];

#[rustfmt::skip]
pub(crate) static SHA512_SHUFFLE: [usize; 64] = [
    42, 21,  0,
     1, 43, 22,
    23,  2, 44,
    45, 24,  3,
     4, 46, 25,
    26,  5, 47,
    48, 27,  6,
     7, 49, 28,
    29,  8, 50,
    51, 30,  9,
    10, 52, 31,
    32, 11, 53,
    54, 33, 12,
    13, 55, 34,
    35, 14, 56,
    57, 36, 15,
    16, 58, 37,
    38, 17, 59,
    60, 39, 18,
    19, 61, 40,
    41, 20, 62,
    63,
];

/// Encodes `digest` in `shuffle` order.
///
/// The last group of a 32-byte digest holds two bytes and of a 64-byte digest
/// one byte; only the characters carrying digest bits are emitted.
pub fn shuffle_encode(digest: &[u8], shuffle: &[usize]) -> String {
    debug_assert_eq!(digest.len(), shuffle.len());

    let mut out = String::with_capacity(shuffle.len().div_ceil(3) * 4);
    for group in shuffle.chunks(3) {
        let mut bytes = [0u8; 3];
        for (byte, &index) in bytes.iter_mut().zip(group) {
            *byte = digest[index];
        }
        encode_group(bytes, &mut out);
    }

    // 32 bytes: 44 chars, the last one padding; 64 bytes: 88 chars, two padding
    let padding = match digest.len() % 3 {
        2 => 1,
        1 => 2,
        _ => 0,
    };
    out.truncate(out.len() - padding);
    out
}

fn encode_group([b0, b1, b2]: [u8; 3], out: &mut String) {
    let sextets = [
        b0 & 0x3f,
        (b0 >> 6) | ((b1 & 0x0f) << 2),
        (b1 >> 4) | ((b2 & 0x03) << 4),
        b2 >> 2,
    ];
    for sextet in sextets {
        out.push(char::from(ALPHABET[usize::from(sextet)]));
    }
}
