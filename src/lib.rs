extern crate clap;

pub mod auth;
pub mod config;
pub mod db;
pub mod error;

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches};
use std::path::Path;

use config::Config;
use db::{seed::DatabaseSeeder, User};

const DEFAULT_DATABASE: &str = "appseed.db";

// CLI definition
pub fn cli() -> clap::Command {
    clap::Command::new("appseed")
        .about("Seed the application database with the configured user")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("CONFIG")
                .help("Path to a YAML config file (values may also come from APP_USER_NAME, APP_USER_EMAIL, APP_USER_PASSWORD)"),
        )
        .arg(
            Arg::new("database")
                .short('d')
                .long("database")
                .value_name("DATABASE")
                .env("APPSEED_DB")
                .help("Path to SQLite database file")
                .default_value(DEFAULT_DATABASE),
        )
}

/// Load config, open the database and run the seeder.
pub async fn run(matches: &ArgMatches) -> Result<User> {
    let config_path = matches.get_one::<String>("config").map(Path::new);
    let db_path = matches
        .get_one::<String>("database")
        .map(|s| s.as_str())
        .unwrap_or(DEFAULT_DATABASE);

    let config = Config::load(config_path)?;

    tracing::debug!(database = db_path, "Opening database");
    let pool = db::init_db(db_path)
        .await
        .with_context(|| format!("Failed to initialize database at {}", db_path))?;

    let user = DatabaseSeeder::new(&config).run(&pool).await;
    pool.close().await;

    user.context("Failed to seed database")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let matches = cli().try_get_matches_from(["appseed"]).unwrap();

        // APPSEED_DB may be set in the environment running the tests
        if std::env::var("APPSEED_DB").is_err() {
            assert_eq!(
                matches.get_one::<String>("database").map(String::as_str),
                Some(DEFAULT_DATABASE)
            );
        }
        assert!(matches.get_one::<String>("config").is_none());
    }

    #[test]
    fn test_cli_args() {
        let matches = cli()
            .try_get_matches_from(["appseed", "-c", "seed.yml", "--database", "other.db"])
            .unwrap();

        assert_eq!(matches.get_one::<String>("config").unwrap(), "seed.yml");
        assert_eq!(matches.get_one::<String>("database").unwrap(), "other.db");
    }

    #[test]
    fn test_cli_rejects_positional_args() {
        assert!(cli().try_get_matches_from(["appseed", "UserSeeder"]).is_err());
    }
}
