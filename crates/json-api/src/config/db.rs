//! Database Config

use std::time::Duration;

use clap::{ArgAction, Args};

use dishpatch_app::database::PoolOptions;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Maximum number of pooled connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 10)]
    pub database_max_connections: u32,

    /// Seconds a request waits for a pooled connection
    #[arg(long, env = "DATABASE_ACQUIRE_TIMEOUT_SECONDS", default_value_t = 30)]
    pub database_acquire_timeout_seconds: u64,

    /// Load the demo catalog when the database is empty
    #[arg(
        long = "database-seed",
        env = "DATABASE_SEED",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub seed: bool,
}

impl DatabaseConfig {
    #[must_use]
    pub fn pool_options(&self) -> PoolOptions {
        PoolOptions {
            max_connections: self.database_max_connections,
            acquire_timeout: Duration::from_secs(self.database_acquire_timeout_seconds),
        }
    }
}
