// Password hashing

use anyhow::{Context, Result};
use bcrypt::{hash, verify};

pub use bcrypt::DEFAULT_COST;

// Hash a password using bcrypt with a random salt
pub fn hash_password(password: &str, cost: u32) -> Result<String> {
    hash(password, cost).context("Failed to hash password")
}

// Verify a password against a hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    verify(password, hash).context("Failed to verify password")
}
