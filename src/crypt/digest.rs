//! Digest A and the expanded P / S buffers.

use sha2::Digest;
use sha2::digest::Output;
use zeroize::{Zeroize, Zeroizing};

/// Computes digest A from the plaintext and salt.
pub fn digest_a<D: Digest>(plaintext: &[u8], salt: &[u8]) -> Output<D> {
    let size = <D as Digest>::output_size();

    let mut hasher = D::new();
    hasher.update(plaintext);
    hasher.update(salt);

    let mut alternate = D::new();
    alternate.update(plaintext);
    alternate.update(salt);
    alternate.update(plaintext);
    let mut digest_b = alternate.finalize();

    // one byte of digest B per plaintext byte
    for _ in 0..plaintext.len() / size {
        hasher.update(&digest_b[..]);
    }
    hasher.update(&digest_b[..plaintext.len() % size]);

    let mut length = plaintext.len();
    while length > 0 {
        if length & 1 == 0 {
            hasher.update(plaintext);
        } else {
            hasher.update(&digest_b[..]);
        }
        length >>= 1;
    }

    digest_b.as_mut_slice().zeroize();
    hasher.finalize()
}

/// Builds the P and S buffers.
///
/// P has the plaintext's length and tiles the digest of the plaintext
/// repeated once per plaintext byte. S has the salt's length and tiles the
/// digest of the salt repeated `16 + seed` times, where `seed` is the first
/// byte of digest A.
pub fn expanded_buffers<D: Digest>(
    plaintext: &[u8],
    salt: &[u8],
    seed: u8,
) -> (Zeroizing<Vec<u8>>, Zeroizing<Vec<u8>>) {
    let mut hasher = D::new();
    for _ in 0..plaintext.len() {
        hasher.update(plaintext);
    }
    let mut digest_dp = hasher.finalize();
    let p = tile(&digest_dp, plaintext.len());
    digest_dp.as_mut_slice().zeroize();

    let mut hasher = D::new();
    for _ in 0..16 + usize::from(seed) {
        hasher.update(salt);
    }
    let mut digest_ds = hasher.finalize();
    let s = tile(&digest_ds, salt.len());
    digest_ds.as_mut_slice().zeroize();

    (p, s)
}

/// Fills `len` bytes with whole copies of `digest` followed by its leading
/// `len % digest.len()` bytes.
fn tile(digest: &[u8], len: usize) -> Zeroizing<Vec<u8>> {
    let size = digest.len();
    let remainder = len % size;
    let full = len - remainder;

    let mut buf = Zeroizing::new(vec![0u8; len]);
    let mut offset = 0;
    while offset < full {
        buf[offset..offset + size].copy_from_slice(digest);
        offset += size;
    }
    buf[full..].copy_from_slice(&digest[..remainder]);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::{Sha256, Sha512};

    #[test]
    fn tile_shorter_than_digest() {
        let digest: Vec<u8> = (0..32).collect();
        assert_eq!(&tile(&digest, 5)[..], &[0u8, 1, 2, 3, 4]);
        assert!(tile(&digest, 0).is_empty());
    }

    #[test]
    fn tile_exact_multiple_has_no_remainder() {
        let digest: Vec<u8> = (1..=32).collect();
        let buf = tile(&digest, 64);
        assert_eq!(&buf[..32], &digest[..]);
        assert_eq!(&buf[32..], &digest[..]);
    }

    #[test]
    fn tile_with_remainder() {
        let digest: Vec<u8> = (1..=32).collect();
        let buf = tile(&digest, 70);
        assert_eq!(&buf[..32], &digest[..]);
        assert_eq!(&buf[32..64], &digest[..]);
        assert_eq!(&buf[64..], &digest[..6]);
    }

    #[test]
    fn buffers_follow_input_lengths() {
        let (p, s) = expanded_buffers::<Sha512>(b"Hello world!", b"saltstring", 7);
        assert_eq!(p.len(), 12);
        assert_eq!(s.len(), 10);

        let (p, s) = expanded_buffers::<Sha256>(&[b'a'; 100], b"", 0);
        assert_eq!(p.len(), 100);
        assert_eq!(&p[..32], &p[32..64]);
        assert!(s.is_empty());
    }

    #[test]
    fn digest_a_depends_on_salt() {
        let a = digest_a::<Sha256>(b"password", b"salt1");
        let b = digest_a::<Sha256>(b"password", b"salt2");
        assert_ne!(a, b);
        assert_eq!(a, digest_a::<Sha256>(b"password", b"salt1"));
        assert_eq!(a.len(), 32);
    }

    #[test]
    fn digest_a_handles_empty_plaintext() {
        let digest = digest_a::<Sha512>(b"", b"saltstring");
        let mut expected = Sha512::new();
        expected.update(b"saltstring");
        assert_eq!(digest, expected.finalize());
    }
}
