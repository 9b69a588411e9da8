//! Test context for service-level integration tests.

use crate::{
    database::Db,
    domain::{catalog::PgCatalogService, orders::PgOrdersService},
    seed,
};

use super::db::TestDb;

pub(crate) struct TestContext {
    pub db: TestDb,
    pub catalog: PgCatalogService,
    pub orders: PgOrdersService,
}

impl TestContext {
    /// Fresh migrated database with services wired to it. The catalog is
    /// empty.
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        Self {
            catalog: PgCatalogService::new(db.clone()),
            orders: PgOrdersService::new(db),
            db: test_db,
        }
    }

    /// Fresh database with the demo catalog loaded.
    pub async fn seeded() -> Self {
        let ctx = Self::new().await;

        seed::seed_catalog(ctx.db.pool())
            .await
            .expect("Failed to seed catalog");

        ctx
    }
}
