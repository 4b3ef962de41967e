//! The SHA-crypt hash pipeline.
//!
//! Salt parsing, the digest A / P / S derivation, the rounds loop and the
//! shuffled base64 encoding of the final digest.

pub mod digest;
pub mod encode;
pub mod rounds;
pub mod salt;

pub use salt::{Algorithm, Config};

use sha2::{Digest, Sha256, Sha512};
use zeroize::Zeroize;

/// Rounds used when the salt specification does not name any.
pub const ROUNDS_DEFAULT: u32 = 5000;
/// Smallest accepted round count; lower requests are raised to it.
pub const ROUNDS_MIN: u32 = 1000;
/// Largest accepted round count; higher requests are lowered to it.
pub const ROUNDS_MAX: u32 = 999_999_999;
/// Maximum salt length in characters (longer salts are truncated).
pub const SALT_MAX_LEN: usize = 16;
/// Base64 alphabet shared by the salt and the encoded digest.
pub const ALPHABET: &[u8; 64] = b"./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Runs the full pipeline and returns the encoded digest (the part after
/// the last `$`).
pub fn generate(plaintext: &[u8], config: &Config) -> String {
    log::trace!(
        "hashing with {:?}, {} rounds",
        config.algorithm(),
        config.rounds()
    );

    match config.algorithm() {
        Algorithm::Sha256 => generate_with::<Sha256>(plaintext, config),
        Algorithm::Sha512 => generate_with::<Sha512>(plaintext, config),
    }
}

fn generate_with<D: Digest>(plaintext: &[u8], config: &Config) -> String {
    let salt = config.salt().as_bytes();

    let mut digest_a = digest::digest_a::<D>(plaintext, salt);
    let (p, s) = digest::expanded_buffers::<D>(plaintext, salt, digest_a[0]);

    let mut digest_c = rounds::digest_c::<D>(&digest_a, &p, &s, config.rounds());
    digest_a.as_mut_slice().zeroize();

    let encoded = encode::shuffle_encode(&digest_c, config.algorithm().shuffle_map());
    digest_c.as_mut_slice().zeroize();

    encoded
}
