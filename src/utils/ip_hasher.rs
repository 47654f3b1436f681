//! Privacy-preserving client IP hashing.

use sha2::{Digest, Sha256};

/// One-way, salted hasher for client IP addresses.
///
/// Produces the hex-encoded SHA-256 digest of `"{salt}:{ip}"`. Deterministic
/// for a given salt, so the same visitor hashes to the same value (enabling
/// de-duplication) without the raw address ever being stored.
///
/// Constructed once at startup from configuration and shared via
/// [`crate::state::AppState`].
#[derive(Debug, Clone)]
pub struct IpHasher {
    salt: String,
}

impl IpHasher {
    /// Creates a hasher with the given secret salt.
    pub fn new(salt: impl Into<String>) -> Self {
        Self { salt: salt.into() }
    }

    /// Hashes an IP address, or returns `None` when no IP is known.
    ///
    /// An absent IP never produces a placeholder hash that could collide
    /// with a real address.
    pub fn hash(&self, ip: Option<&str>) -> Option<String> {
        let ip = ip?;

        let mut hasher = Sha256::new();
        hasher.update(self.salt.as_bytes());
        hasher.update(b":");
        hasher.update(ip.as_bytes());

        Some(hex::encode(hasher.finalize()))
    }
}
