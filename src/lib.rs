//! SHA-256 / SHA-512 Unix crypt password hashing.
//!
//! Produces and checks `$5$` / `$6$` hash strings compatible with
//! `/etc/shadow` and glibc `crypt(3)`.
//!
//! ```
//! let hash = shacrypt::encrypt("Hello world!", Some("$6$saltstring")).unwrap();
//! assert!(hash.starts_with("$6$saltstring$svn8UoSVapNtMuq1ukKS4tPQd8iKwSMHWjl"));
//! assert!(shacrypt::verify("Hello world!", &hash).unwrap());
//! ```

pub mod crypt;
mod error;

pub use crate::crypt::{
    ALPHABET, Algorithm, Config, ROUNDS_DEFAULT, ROUNDS_MAX, ROUNDS_MIN, SALT_MAX_LEN,
};
pub use crate::error::CryptError;
use subtle::ConstantTimeEq;

/// Hashes `plaintext` with an optional salt specification such as
/// `"$6$salt"` or `"$5$rounds=10000$salt"`.
///
/// Without a specification a SHA-512 hash with a random salt and default
/// rounds is produced.
///
/// # Errors
///
/// Returns an error if the salt specification is invalid or a random salt
/// cannot be generated.
pub fn encrypt(plaintext: impl AsRef<[u8]>, salt: Option<&str>) -> Result<String, CryptError> {
    let config = Config::parse(salt)?;
    Ok(encrypt_with(plaintext, &config))
}

/// Hashes `plaintext` with an already validated [`Config`].
pub fn encrypt_with(plaintext: impl AsRef<[u8]>, config: &Config) -> String {
    let encoded = crypt::generate(plaintext.as_ref(), config);
    format!("{config}${encoded}")
}

/// Checks `plaintext` against `hash` in constant time.
///
/// # Errors
///
/// A malformed `hash` yields the same error [`encrypt`] gives for its salt
/// specification. A hash without any `$` is an [`CryptError::InvalidSaltFormat`].
pub fn verify(plaintext: impl AsRef<[u8]>, hash: &str) -> Result<bool, CryptError> {
    let setting = hash
        .rfind('$')
        .map(|end| &hash[..end])
        .ok_or(CryptError::InvalidSaltFormat)?;

    let computed = encrypt(plaintext, Some(setting))?;
    Ok(computed.as_bytes().ct_eq(hash.as_bytes()).into())
}
