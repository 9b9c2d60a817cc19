//! Salted Argon2 password digests.
//!
//! Only the PHC-formatted digest is stored. Verification delegates to
//! `argon2`'s `PasswordVerifier`, which compares digests in constant time.

use std::fmt;

use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

/// Failures raised while hashing a password.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordHashError {
    /// The operating system random source failed.
    #[error("salt generation failed: {message}")]
    Salt {
        /// Underlying failure description.
        message: String,
    },
    /// Argon2 rejected the parameters or input.
    #[error("password hashing failed: {message}")]
    Hash {
        /// Underlying failure description.
        message: String,
    },
}

/// Argon2id cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingCost {
    /// Memory cost in KiB.
    pub memory_kib: u32,
    /// Number of passes.
    pub iterations: u32,
    /// Degree of parallelism.
    pub parallelism: u32,
}

impl Default for HashingCost {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

impl HashingCost {
    /// Smallest cost Argon2 accepts. Keeps test suites fast.
    #[cfg(any(test, feature = "test-support"))]
    pub const fn minimal() -> Self {
        Self {
            memory_kib: Params::MIN_M_COST,
            iterations: Params::MIN_T_COST,
            parallelism: Params::MIN_P_COST,
        }
    }
}

/// Produces and checks password digests with a fixed cost.
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordHasher").finish_non_exhaustive()
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

impl PasswordHasher {
    /// Build a hasher with explicit Argon2id parameters.
    pub fn with_cost(cost: HashingCost) -> Result<Self, PasswordHashError> {
        let params = Params::new(cost.memory_kib, cost.iterations, cost.parallelism, None)
            .map_err(|err| PasswordHashError::Hash {
                message: err.to_string(),
            })?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash `password` with a fresh random salt.
    pub fn hash(&self, password: &str) -> Result<PasswordDigest, PasswordHashError> {
        let mut salt_bytes = [0_u8; 16];
        getrandom::getrandom(&mut salt_bytes).map_err(|err| PasswordHashError::Salt {
            message: err.to_string(),
        })?;
        let salt = SaltString::encode_b64(&salt_bytes).map_err(|err| PasswordHashError::Salt {
            message: err.to_string(),
        })?;
        let phc = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|err| PasswordHashError::Hash {
                message: err.to_string(),
            })?;
        Ok(PasswordDigest(phc.to_string()))
    }

    /// Check `password` against a stored digest.
    ///
    /// A digest that fails to parse never verifies.
    pub fn verify(&self, digest: &PasswordDigest, password: &str) -> bool {
        PasswordHash::new(&digest.0)
            .map(|parsed| {
                self.argon2
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }
}

/// PHC-formatted Argon2 digest.
///
/// `Debug` output is redacted so digests do not end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// PHC string, e.g. `$argon2id$v=19$...`.
    pub fn as_phc(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordDigest(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn hasher() -> PasswordHasher {
        PasswordHasher::with_cost(HashingCost::minimal()).expect("minimal cost is valid")
    }

    #[rstest]
    fn digest_verifies_original_password_only(hasher: PasswordHasher) {
        let digest = hasher.hash("admin123").expect("hash");
        assert!(hasher.verify(&digest, "admin123"));
        assert!(!hasher.verify(&digest, "admin124"));
        assert!(!hasher.verify(&digest, ""));
    }

    #[rstest]
    fn digest_never_contains_plaintext(hasher: PasswordHasher) {
        let digest = hasher.hash("emp123").expect("hash");
        assert!(digest.as_phc().starts_with("$argon2id$"));
        assert!(!digest.as_phc().contains("emp123"));
        assert_eq!(format!("{digest:?}"), "PasswordDigest(<redacted>)");
    }

    #[rstest]
    fn same_password_gets_distinct_salts(hasher: PasswordHasher) {
        let first = hasher.hash("emp456").expect("hash");
        let second = hasher.hash("emp456").expect("hash");
        assert_ne!(first, second);
    }

    #[rstest]
    fn malformed_digest_never_verifies(hasher: PasswordHasher) {
        let bogus = PasswordDigest("plaintext".to_owned());
        assert!(!hasher.verify(&bogus, "plaintext"));
    }

    #[rstest]
    fn zero_memory_cost_is_rejected() {
        let cost = HashingCost {
            memory_kib: 0,
            ..HashingCost::minimal()
        };
        assert!(PasswordHasher::with_cost(cost).is_err());
    }
}
