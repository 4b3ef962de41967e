use std::fmt;

/// Errors produced while parsing a salt specification or hashing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CryptError {
    /// The `$<id>` field names something other than `5` or `6`.
    UnsupportedAlgorithm(String),
    /// Wrong number of `$`-delimited fields, or a malformed `rounds=` field.
    InvalidSaltFormat,
    /// The salt contains a character outside `./0-9A-Za-z`.
    InvalidSaltCharacters,
    /// The OS random generator could not produce a salt.
    RandomUnavailable,
}

impl fmt::Display for CryptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptError::UnsupportedAlgorithm(id) => write!(
                f,
                "unsupported algorithm '{id}': only sha256 ($5$) and sha512 ($6$) are supported"
            ),
            CryptError::InvalidSaltFormat => write!(f, "invalid salt string format"),
            CryptError::InvalidSaltCharacters => {
                write!(f, "invalid salt string: characters must be in ./0-9A-Za-z")
            }
            CryptError::RandomUnavailable => write!(f, "OS random generator unavailable"),
        }
    }
}

impl std::error::Error for CryptError {}
