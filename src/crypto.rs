//! Password hashing and token generation.

use argon2::{Algorithm, Argon2, Params, PasswordVerifier, Version};
use password_hash::{PasswordHash, SaltString};
use rand::rngs::OsRng;

use crate::MoodlogError;

/// Hashes and verifies passwords.
///
/// The actions take this as a trait so tests can swap in a cheap hasher.
pub trait PasswordHasher: Send + Sync {
    /// Hash a password with a fresh random salt.
    fn hash(&self, password: &str) -> Result<String, MoodlogError>;

    /// Verify a password against a stored hash.
    ///
    /// Returns `Ok(false)` on mismatch; errors only when the stored hash is
    /// malformed.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, MoodlogError>;
}

/// Argon2id password hasher with configurable parameters.
#[derive(Debug, Clone)]
pub struct Argon2Hasher {
    /// Memory cost in KiB
    memory_cost: u32,
    /// Number of iterations
    time_cost: u32,
    /// Degree of parallelism
    parallelism: u32,
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self {
            memory_cost: 19456, // 19 MiB - argon2 default
            time_cost: 2,
            parallelism: 1,
        }
    }
}

impl Argon2Hasher {
    /// Creates a new hasher with custom parameters.
    pub fn new(memory_cost: u32, time_cost: u32, parallelism: u32) -> Self {
        Self {
            memory_cost,
            time_cost,
            parallelism,
        }
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, MoodlogError> {
        let salt = SaltString::generate(&mut OsRng);
        let params = Params::new(self.memory_cost, self.time_cost, self.parallelism, None)
            .map_err(|_| MoodlogError::PasswordHashError)?;
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        argon2::PasswordHasher::hash_password(&argon2, password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|_| MoodlogError::PasswordHashError)
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, MoodlogError> {
        let parsed = PasswordHash::new(hash).map_err(|_| MoodlogError::PasswordHashError)?;

        // Verification uses params from the hash, not from config
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

/// Generates a random alphanumeric token of the given length.
///
/// Used for session identifiers; 32 characters gives ~190 bits of entropy.
pub fn generate_token(length: usize) -> String {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| char::from(rng.sample(rand::distributions::Alphanumeric)))
        .collect()
}
