//! Salt specification parsing and normalization.
//!
//! A salt specification is the leading part of a crypt hash string:
//! `$<id>`, `$<id>$<salt>`, `$<id>$rounds=<n>` or `$<id>$rounds=<n>$<salt>`.

use std::fmt;
use std::str::FromStr;

use getrandom::fill;

use super::encode::{SHA256_SHUFFLE, SHA512_SHUFFLE};
use super::{ALPHABET, ROUNDS_DEFAULT, ROUNDS_MAX, ROUNDS_MIN, SALT_MAX_LEN};
use crate::error::CryptError;

const ROUNDS_PREFIX: &str = "rounds=";

/// The two SHA-crypt variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// `$5$`, SHA-256 with a 32-byte digest.
    Sha256,
    /// `$6$`, SHA-512 with a 64-byte digest.
    #[default]
    Sha512,
}

impl Algorithm {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "5" => Some(Algorithm::Sha256),
            "6" => Some(Algorithm::Sha512),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Algorithm::Sha256 => "5",
            Algorithm::Sha512 => "6",
        }
    }

    pub fn digest_size(&self) -> usize {
        match self {
            Algorithm::Sha256 => 32,
            Algorithm::Sha512 => 64,
        }
    }

    /// Length of the encoded digest in the hash string.
    pub fn encoded_len(&self) -> usize {
        match self {
            Algorithm::Sha256 => 43,
            Algorithm::Sha512 => 86,
        }
    }

    pub(crate) fn shuffle_map(&self) -> &'static [usize] {
        match self {
            Algorithm::Sha256 => &SHA256_SHUFFLE,
            Algorithm::Sha512 => &SHA512_SHUFFLE,
        }
    }
}

/// Validated hashing parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    algorithm: Algorithm,
    salt: String,
    rounds: u32,
    rounds_explicit: bool,
}

impl Config {
    /// Builds a config from its parts.
    ///
    /// A missing salt is generated at random. Passing `rounds` marks them as
    /// explicit so they always appear in the hash string.
    ///
    /// # Errors
    ///
    /// Returns an error if the salt contains invalid characters or a random
    /// salt cannot be generated.
    pub fn new(
        algorithm: Algorithm,
        salt: Option<&str>,
        rounds: Option<u32>,
    ) -> Result<Self, CryptError> {
        let salt = match salt {
            Some(salt) => salt.to_string(),
            None => random_salt()?,
        };

        Self::finish(
            algorithm,
            salt,
            rounds.map_or(u64::from(ROUNDS_DEFAULT), u64::from),
            rounds.is_some(),
        )
    }

    /// Parses an optional salt specification.
    ///
    /// No specification (or an empty one) selects SHA-512 with a random salt
    /// and default rounds.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The algorithm id is not `5` or `6`
    /// - The field count is wrong, or the rounds field is malformed
    /// - The salt contains characters outside `./0-9A-Za-z`
    pub fn parse(spec: Option<&str>) -> Result<Self, CryptError> {
        let spec = match spec {
            Some(spec) if !spec.is_empty() => spec,
            _ => {
                return Self::finish(
                    Algorithm::default(),
                    random_salt()?,
                    u64::from(ROUNDS_DEFAULT),
                    false,
                );
            }
        };

        let fields: Vec<&str> = spec.split('$').collect();
        if !fields[0].is_empty() {
            return Err(CryptError::InvalidSaltFormat);
        }

        let id = fields.get(1).copied().unwrap_or_default();
        let algorithm =
            Algorithm::from_id(id).ok_or_else(|| CryptError::UnsupportedAlgorithm(id.to_string()))?;

        if fields.len() > 4 {
            return Err(CryptError::InvalidSaltFormat);
        }

        let (salt, rounds) = match fields[2..] {
            [] => (None, None),
            [field] => match parse_rounds(field) {
                Some(rounds) => (None, Some(rounds)),
                None => (Some(field), None),
            },
            [field, salt] => {
                let rounds = parse_rounds(field).ok_or(CryptError::InvalidSaltFormat)?;
                (Some(salt), Some(rounds))
            }
            _ => return Err(CryptError::InvalidSaltFormat),
        };

        let salt = match salt {
            Some(salt) => salt.to_string(),
            None => random_salt()?,
        };

        Self::finish(
            algorithm,
            salt,
            rounds.unwrap_or(u64::from(ROUNDS_DEFAULT)),
            rounds.is_some(),
        )
    }

    fn finish(
        algorithm: Algorithm,
        salt: String,
        rounds: u64,
        rounds_explicit: bool,
    ) -> Result<Self, CryptError> {
        let clamped = rounds.clamp(u64::from(ROUNDS_MIN), u64::from(ROUNDS_MAX));
        if clamped != rounds {
            log::debug!("rounds {rounds} out of range, using {clamped}");
        }

        let salt: String = salt.chars().take(SALT_MAX_LEN).collect();
        if !salt.bytes().all(|b| ALPHABET.contains(&b)) {
            return Err(CryptError::InvalidSaltCharacters);
        }

        Ok(Self {
            algorithm,
            salt,
            // clamped into ROUNDS_MIN..=ROUNDS_MAX, fits in u32
            rounds: clamped as u32,
            rounds_explicit,
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Whether the specification carried a `rounds=` field.
    pub fn rounds_explicit(&self) -> bool {
        self.rounds_explicit
    }
}

impl FromStr for Config {
    type Err = CryptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(Some(s))
    }
}

/// Writes the normalized salt specification, without a trailing `$`.
impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.algorithm.id())?;
        if self.rounds_explicit || self.rounds != ROUNDS_DEFAULT {
            write!(f, "${ROUNDS_PREFIX}{}", self.rounds)?;
        }
        write!(f, "${}", self.salt)
    }
}

/// Matches `rounds=<digits>`; an empty digit run reads as zero and an
/// oversized one saturates.
fn parse_rounds(field: &str) -> Option<u64> {
    let digits = field.strip_prefix(ROUNDS_PREFIX)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.is_empty() {
        return Some(0);
    }
    Some(digits.parse().unwrap_or(u64::MAX))
}

/// Generate a random salt of `SALT_MAX_LEN` characters
fn random_salt() -> Result<String, CryptError> {
    let mut bytes = [0u8; SALT_MAX_LEN];
    fill(&mut bytes).map_err(|_| CryptError::RandomUnavailable)?;

    let salt = bytes
        .iter()
        .map(|b| char::from(ALPHABET[usize::from(b & 0x3f)]))
        .collect();
    log::debug!("generated random salt");
    Ok(salt)
}
