// Common test utilities shared across test files

use appseed::config::{Config, BCRYPT_ROUNDS_KEY, USER_EMAIL_KEY, USER_NAME_KEY, USER_PASSWORD_KEY};
use sqlx::SqlitePool;

pub const TEST_NAME: &str = "Test Admin";
pub const TEST_EMAIL: &str = "admin@example.com";
pub const TEST_PASSWORD: &str = "testpass123";

/// Set up an in-memory SQLite database with the users table
#[allow(dead_code)]
pub async fn setup_test_db() -> SqlitePool {
    appseed::db::init_db(appseed::db::IN_MEMORY)
        .await
        .expect("Failed to create in-memory database")
}

/// Config holding the seeded user, with the cheapest bcrypt cost
#[allow(dead_code)]
pub fn seed_config() -> Config {
    let mut config = Config::default();
    config.set(USER_NAME_KEY, TEST_NAME);
    config.set(USER_EMAIL_KEY, TEST_EMAIL);
    config.set(USER_PASSWORD_KEY, TEST_PASSWORD);
    config.set(BCRYPT_ROUNDS_KEY, "4");
    config
}

/// YAML equivalent of `seed_config`
#[allow(dead_code)]
pub fn seed_yaml() -> String {
    format!(
        "app:\n  user_name: {}\n  user_email: {}\n  user_password: {}\nhashing:\n  bcrypt_rounds: 4\n",
        TEST_NAME, TEST_EMAIL, TEST_PASSWORD
    )
}
