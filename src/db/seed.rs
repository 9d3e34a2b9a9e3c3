// Database seeding: creates the configured application user

use anyhow::Result;
use sqlx::SqlitePool;

use crate::auth;
use crate::config::{
    settings::{HashingSettings, SeedUserSettings},
    Config,
};
use crate::db::{factory::UserFactory, User};

pub struct DatabaseSeeder<'a> {
    config: &'a Config,
}

impl<'a> DatabaseSeeder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Seed the application's database.
    ///
    /// Fails without writing anything when the configured user is incomplete, and
    /// fails without touching the existing row when the email is already taken.
    pub async fn run(&self, pool: &SqlitePool) -> Result<User> {
        let settings = SeedUserSettings::from_config(self.config)?;
        let hashing = HashingSettings::from_config(self.config)?;

        let password_hash = auth::hash_password(&settings.password, hashing.bcrypt_rounds)?;

        let user = UserFactory::new()
            .name(settings.name)
            .email(settings.email)
            .password(password_hash)
            .create(pool)
            .await?;

        tracing::info!(user_id = user.id, email = %user.email, "Seeded application user");

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{USER_EMAIL_KEY, USER_NAME_KEY, USER_PASSWORD_KEY};
    use crate::db::{self, IN_MEMORY};
    use crate::error::{SeedError, SeedErrorExt};

    fn config() -> Config {
        let mut config = Config::default();
        config.set(USER_NAME_KEY, "Admin");
        config.set(USER_EMAIL_KEY, "admin@example.com");
        config.set(USER_PASSWORD_KEY, "s3cret-password");
        config.set(crate::config::BCRYPT_ROUNDS_KEY, "4");
        config
    }

    #[tokio::test]
    async fn test_run_hashes_password() {
        let pool = db::init_db(IN_MEMORY).await.unwrap();
        let user = DatabaseSeeder::new(&config()).run(&pool).await.unwrap();

        assert_eq!(user.name, "Admin");
        assert_eq!(user.email, "admin@example.com");
        assert_ne!(user.password, "s3cret-password");
        assert!(auth::verify_password("s3cret-password", &user.password).unwrap());
    }

    #[tokio::test]
    async fn test_invalid_rounds_writes_nothing() {
        let pool = db::init_db(IN_MEMORY).await.unwrap();
        let mut config = config();
        config.set(crate::config::BCRYPT_ROUNDS_KEY, "99");

        let err = DatabaseSeeder::new(&config).run(&pool).await.unwrap_err();

        assert!(matches!(err.seed_error(), Some(SeedError::InvalidConfig(_, _))));
        assert_eq!(db::count_users(&pool).await.unwrap(), 0);
    }
}
