//! Password hashing.
//!
//! PBKDF2-HMAC-SHA512 with a fixed salt and iteration count, hex-encoded.
//! Deterministic: the same password always produces the same digest, so
//! two users sharing a password share a digest, and the scheme offers no
//! rainbow-table resistance across deployments. Kept compatible with the
//! digests the demo deployment already stores; see DESIGN.md before
//! changing any of these constants.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;

const SALT: &[u8] = b"salt";
const ITERATIONS: u32 = 1000;
const DIGEST_BYTES: usize = 64;

/// Hash a plaintext password.
#[must_use]
pub fn hash_password(password: &str) -> String {
    let mut digest = [0u8; DIGEST_BYTES];
    pbkdf2_hmac::<Sha512>(password.as_bytes(), SALT, ITERATIONS, &mut digest);
    hex::encode(digest)
}

/// Verify a plaintext password against a stored digest.
#[must_use]
pub fn verify_password(password: &str, digest: &str) -> bool {
    hash_password(password) == digest
}
