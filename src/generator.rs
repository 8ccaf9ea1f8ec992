//! Strong password generation.
//!
//! Passwords are built from pools that leave out visually ambiguous glyphs
//! (`l`, `I`, `O`, `0`, `1`). One character from every pool is always
//! included, so a generated password meets each character-class rule. A
//! draw that happens to contain a repeated run or a common sequence is
//! discarded and redrawn.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use secrecy::SecretString;
use thiserror::Error;

use crate::rules::{no_repeat_rule, no_sequence_rule};

/// Length used by [`generate_strong_password`].
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;

/// Shortest length that fits one character from every pool.
pub const MIN_PASSWORD_LENGTH: usize = POOLS.len();

const LOWERCASE: &[u8] = b"abcdefghijkmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ";
const DIGITS: &[u8] = b"23456789";
const SPECIAL: &[u8] = b"!@#$%&*?";

const POOLS: [&[u8]; 4] = [LOWERCASE, UPPERCASE, DIGITS, SPECIAL];

/// Redraw limit for pattern failures. Only very long passwords get close.
const MAX_ATTEMPTS: usize = 64;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length {requested} is below the minimum of {minimum}")]
    InvalidLength { requested: usize, minimum: usize },
}

/// Generates a password of [`DEFAULT_PASSWORD_LENGTH`] characters.
pub fn generate_strong_password() -> SecretString {
    fill_password(DEFAULT_PASSWORD_LENGTH, &mut OsRng)
}

/// Generates a random password of `length` characters using the OS CSPRNG.
///
/// # Errors
///
/// Returns [`GeneratorError::InvalidLength`] if `length` is below
/// [`MIN_PASSWORD_LENGTH`].
pub fn generate_password(length: usize) -> Result<SecretString, GeneratorError> {
    generate_password_with_rng(length, &mut OsRng)
}

/// Same as [`generate_password`] with a caller-supplied secure RNG.
pub fn generate_password_with_rng<R>(
    length: usize,
    rng: &mut R,
) -> Result<SecretString, GeneratorError>
where
    R: Rng + CryptoRng + ?Sized,
{
    if length < MIN_PASSWORD_LENGTH {
        #[cfg(feature = "tracing")]
        tracing::warn!("Rejected password length {} (minimum {})", length, MIN_PASSWORD_LENGTH);
        return Err(GeneratorError::InvalidLength {
            requested: length,
            minimum: MIN_PASSWORD_LENGTH,
        });
    }
    Ok(fill_password(length, rng))
}

fn fill_password<R>(length: usize, rng: &mut R) -> SecretString
where
    R: Rng + CryptoRng + ?Sized,
{
    #[cfg(feature = "tracing")]
    tracing::debug!("Generating password of length {}", length);

    let all = POOLS.concat();
    let mut password = draw(length, &all, rng);
    for _ in 1..MAX_ATTEMPTS {
        if no_repeat_rule(&password) && no_sequence_rule(&password) {
            break;
        }
        password = draw(length, &all, rng);
    }
    SecretString::new(password.into())
}

fn draw<R>(length: usize, all: &[u8], rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    let mut chars: Vec<u8> = POOLS.iter().map(|pool| pick(pool, rng)).collect();
    while chars.len() < length {
        chars.push(pick(all, rng));
    }
    chars.shuffle(rng);
    chars.into_iter().map(char::from).collect()
}

fn pick<R: Rng + ?Sized>(pool: &[u8], rng: &mut R) -> u8 {
    pool[rng.gen_range(0..pool.len())]
}
