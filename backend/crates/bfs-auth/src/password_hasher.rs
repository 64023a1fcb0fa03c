use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::password_hash::{
    Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};
use error_location::ErrorLocation;
use rand::Rng;

/// OWASP minimum for Argon2id: 19 MiB memory, 2 iterations, 1 lane
pub const MIN_MEMORY_KIB: u32 = 19_456;
pub const MIN_ITERATIONS: u32 = 2;

/// Argon2id password hashing.
///
/// Holds a hash of a throwaway password so that logins for unknown emails
/// can spend the same time verifying as logins for known ones.
pub struct PasswordHasher {
    params: Params,
    dummy_hash: String,
}

impl PasswordHasher {
    #[track_caller]
    pub fn new(memory_kib: u32, iterations: u32) -> AuthErrorResult<Self> {
        let location = ErrorLocation::from(Location::caller());
        let params =
            Params::new(memory_kib, iterations, 1, None).map_err(|e| AuthError::PasswordHash {
                message: format!("Invalid Argon2 parameters: {e}"),
                location,
            })?;

        let mut hasher = Self {
            params,
            dummy_hash: String::new(),
        };
        hasher.dummy_hash = hasher.hash("bfs-timing-equalizer")?;

        Ok(hasher)
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash a password into a PHC string (`$argon2id$v=19$...`)
    #[track_caller]
    pub fn hash(&self, password: &str) -> AuthErrorResult<String> {
        let caller = Location::caller();

        let salt_bytes: [u8; 16] = rand::rng().random();
        let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| AuthError::PasswordHash {
            message: format!("Failed to encode salt: {e}"),
            location: ErrorLocation::from(caller),
        })?;

        self.argon2()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::PasswordHash {
                message: format!("Failed to hash password: {e}"),
                location: ErrorLocation::from(caller),
            })
    }

    /// `Ok(false)` on mismatch; `Err` only when the stored hash is unusable
    #[track_caller]
    pub fn verify(&self, password: &str, hash: &str) -> AuthErrorResult<bool> {
        let caller = Location::caller();

        let parsed = PasswordHash::new(hash).map_err(|e| AuthError::PasswordHash {
            message: format!("Stored hash is malformed: {e}"),
            location: ErrorLocation::from(caller),
        })?;

        // Parameters come from the PHC string, so hashes made with older
        // settings still verify.
        match self.argon2().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(PasswordHashError::Password) => Ok(false),
            Err(e) => Err(AuthError::PasswordHash {
                message: format!("Password verification failed: {e}"),
                location: ErrorLocation::from(caller),
            }),
        }
    }

    /// Burn one verification for an account that does not exist
    pub fn verify_dummy(&self, password: &str) {
        let _ = self.verify(password, &self.dummy_hash);
    }
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher")
            .field("memory_kib", &self.params.m_cost())
            .field("iterations", &self.params.t_cost())
            .finish_non_exhaustive()
    }
}
