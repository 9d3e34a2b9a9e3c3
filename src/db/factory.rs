// User factory: builds and persists a user with defaults plus overrides

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rand::{distributions::Alphanumeric, Rng};
use sqlx::SqlitePool;

use super::User;
use crate::error::SeedError;

const REMEMBER_TOKEN_LEN: usize = 10;

/// Builder for a new `users` row.
///
/// Defaults mark the email as verified now and assign a random remember token.
/// The password is stored exactly as given, so callers pass a hash.
#[derive(Debug, Clone)]
pub struct UserFactory {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    email_verified_at: Option<DateTime<Utc>>,
    remember_token: Option<String>,
}

impl Default for UserFactory {
    fn default() -> Self {
        Self {
            name: None,
            email: None,
            password: None,
            email_verified_at: Some(Utc::now()),
            remember_token: Some(random_token(REMEMBER_TOKEN_LEN)),
        }
    }
}

impl UserFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Already-hashed password
    pub fn password(mut self, password_hash: impl Into<String>) -> Self {
        self.password = Some(password_hash.into());
        self
    }

    pub fn unverified(mut self) -> Self {
        self.email_verified_at = None;
        self
    }

    pub async fn create(self, pool: &SqlitePool) -> Result<User> {
        let name = self.name.ok_or(SeedError::MissingAttribute("name"))?;
        let email = self.email.ok_or(SeedError::MissingAttribute("email"))?;
        let password = self.password.ok_or(SeedError::MissingAttribute("password"))?;
        let now = Utc::now();

        let result = sqlx::query(
            "INSERT INTO users (name, email, email_verified_at, password, remember_token, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&name)
        .bind(&email)
        .bind(self.email_verified_at)
        .bind(&password)
        .bind(&self.remember_token)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                anyhow::Error::new(SeedError::DuplicateEmail(email.clone()))
            }
            other => anyhow::Error::new(other).context("Failed to insert user"),
        })?;

        let id = result.last_insert_rowid();
        super::get_user_by_id(pool, id)
            .await?
            .with_context(|| format!("User {} vanished after insert", id))
    }
}

// Drawn from [A-Za-z0-9]
fn random_token(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
