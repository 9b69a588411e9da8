//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db, PoolOptions},
    domain::{
        catalog::{CatalogService, PgCatalogService},
        orders::{OrdersService, PgOrdersService},
        payments::{
            PaymentsService, PaystackPaymentsService,
            paystack::{PaystackClient, PaystackConfig},
        },
    },
    seed,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply migrations")]
    Migrate(#[source] sqlx::migrate::MigrateError),

    #[error("failed to seed catalog")]
    Seed(#[source] sqlx::Error),
}

/// Settings needed to build an [`AppContext`].
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub database_url: String,
    pub pool: PoolOptions,
    /// Load the demo catalog into an empty database on startup.
    pub seed: bool,
    pub paystack: PaystackConfig,
    /// Public URL of the web client, used for payment redirects.
    pub frontend_url: String,
}

/// Every service the API needs, behind trait objects.
#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<dyn CatalogService>,
    pub orders: Arc<dyn OrdersService>,
    pub payments: Arc<dyn PaymentsService>,
}

impl AppContext {
    /// Connect, migrate, optionally seed, and wire the services together.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting, migrating or seeding fails.
    pub async fn initialize(settings: AppSettings) -> Result<Self, AppInitError> {
        let pool = database::connect(&settings.database_url, settings.pool)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrate)?;

        if settings.seed {
            seed::seed_catalog(&pool).await.map_err(AppInitError::Seed)?;
        }

        Ok(Self::from_db(
            Db::new(pool),
            PaystackClient::new(settings.paystack),
            &settings.frontend_url,
        ))
    }

    /// Wire services over an existing pool.
    #[must_use]
    pub fn from_db(db: Db, paystack: PaystackClient, frontend_url: &str) -> Self {
        let orders: Arc<dyn OrdersService> = Arc::new(PgOrdersService::new(db.clone()));

        Self {
            catalog: Arc::new(PgCatalogService::new(db)),
            payments: Arc::new(PaystackPaymentsService::new(
                paystack,
                Arc::clone(&orders),
                frontend_url,
            )),
            orders,
        }
    }
}
