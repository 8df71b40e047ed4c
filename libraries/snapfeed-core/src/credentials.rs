//! Credential digests
//!
//! Passwords are stored as an unsalted, single-pass SHA-256 digest encoded as
//! standard padded base64 (always 44 characters). This keeps existing stored
//! digests valid, but it is a known weakness: a fast unsalted hash offers no
//! protection against precomputed or brute-force attacks. A slow salted KDF
//! would need a digest format migration.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use sha2::{Digest, Sha256};

/// Length of an encoded digest
pub const DIGEST_LEN: usize = 44;

/// Hash a plaintext password into its stored digest form
pub fn hash_password(password: &str) -> String {
    STANDARD.encode(Sha256::digest(password.as_bytes()))
}
