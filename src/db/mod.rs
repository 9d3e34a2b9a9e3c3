// Database module for the users table

pub mod factory;
pub mod seed;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

pub const IN_MEMORY: &str = ":memory:";

// Initialize database and run migrations
pub async fn init_db(db_path: &str) -> Result<SqlitePool> {
    let pool = if db_path == IN_MEMORY {
        // A single connection that never recycles, otherwise the data goes with it
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .context("Failed to open in-memory database")?
    } else {
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", db_path))
            .with_context(|| format!("Invalid database path: {}", db_path))?
            .create_if_missing(true);

        SqlitePool::connect_with(options)
            .await
            .context("Failed to connect to database")?
    };

    // Enable foreign keys
    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .context("Failed to enable foreign keys")?;

    run_migrations(&pool).await?;

    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    let migration_sql = include_str!("../../migrations/001_create_users_table.sql");
    sqlx::query(migration_sql)
        .execute(pool)
        .await
        .context("Failed to run migration 001")?;

    Ok(())
}

// User model
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub email_verified_at: Option<DateTime<Utc>>,
    pub password: String,
    pub remember_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

const USER_COLUMNS: &str =
    "id, name, email, email_verified_at, password, remember_token, created_at, updated_at";

// Find user by email (case-insensitive via the column collation)
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {} FROM users WHERE email = ?",
        USER_COLUMNS
    ))
    .bind(email)
    .fetch_optional(pool)
    .await
    .context("Failed to look up user by email")?;

    Ok(user)
}

// Get user by ID
pub async fn get_user_by_id(pool: &SqlitePool, user_id: i64) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS))
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .context("Failed to look up user by id")?;

    Ok(user)
}

pub async fn count_users(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .context("Failed to count users")?;

    Ok(count)
}
