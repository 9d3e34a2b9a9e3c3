use serde::Serialize;
use std::fmt;

use super::{Config, BCRYPT_ROUNDS_KEY, USER_EMAIL_KEY, USER_NAME_KEY, USER_PASSWORD_KEY};
use crate::{auth, error::SeedError};

const MIN_BCRYPT_ROUNDS: u32 = 4;
const MAX_BCRYPT_ROUNDS: u32 = 31;

/// The user the seeder creates.
#[derive(Serialize, Clone, PartialEq)]
pub struct SeedUserSettings {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

// Keep the plaintext out of logs and panic messages
impl fmt::Debug for SeedUserSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedUserSettings")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl SeedUserSettings {
    pub fn from_config(config: &Config) -> Result<Self, SeedError> {
        Ok(Self {
            name: config.require(USER_NAME_KEY)?.to_string(),
            email: config.require(USER_EMAIL_KEY)?.trim().to_string(),
            password: config.require(USER_PASSWORD_KEY)?.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingSettings {
    pub bcrypt_rounds: u32,
}

impl Default for HashingSettings {
    fn default() -> Self {
        Self {
            bcrypt_rounds: auth::DEFAULT_COST,
        }
    }
}

impl HashingSettings {
    pub fn from_config(config: &Config) -> Result<Self, SeedError> {
        let Some(raw) = config.get(BCRYPT_ROUNDS_KEY) else {
            return Ok(Self::default());
        };

        let invalid = |reason: String| SeedError::InvalidConfig(BCRYPT_ROUNDS_KEY.to_string(), reason);

        let rounds: u32 = raw
            .trim()
            .parse()
            .map_err(|_| invalid(format!("'{}' is not a number", raw)))?;

        if !(MIN_BCRYPT_ROUNDS..=MAX_BCRYPT_ROUNDS).contains(&rounds) {
            return Err(invalid(format!(
                "must be between {} and {}, got {}",
                MIN_BCRYPT_ROUNDS, MAX_BCRYPT_ROUNDS, rounds
            )));
        }

        Ok(Self {
            bcrypt_rounds: rounds,
        })
    }
}
