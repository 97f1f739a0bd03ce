// ABOUTME: Salt generation and salted password digest utilities
// ABOUTME: Implements the credential hashing discipline used by the user store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitness Tracker contributors

//! Credential hashing primitives.
//!
//! Passwords are stored as `hex(SHA-256(salt ∥ password))` with a fresh
//! 128-bit random salt per account and per password change. A single
//! unstretched digest is a known limitation compared to a memory-hard KDF;
//! changing the scheme would invalidate existing stored hashes.

use rand::RngCore;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::constants::limits::SALT_LENGTH_BYTES;

/// Generate a fresh cryptographically-random salt, hex encoded
#[must_use]
pub fn generate_salt() -> String {
    let mut bytes = [0u8; SALT_LENGTH_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Compute the stored digest for a password under the given salt
#[must_use]
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Check a candidate password against a stored salt and digest
///
/// Comparison is constant-time so the match result leaks no timing
/// information about the stored digest.
#[must_use]
pub fn verify_password(password: &str, salt: &str, stored_hash: &str) -> bool {
    let computed = hash_password(password, salt);
    computed.as_bytes().ct_eq(stored_hash.as_bytes()).into()
}
