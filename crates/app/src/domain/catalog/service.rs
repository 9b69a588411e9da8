//! Catalog service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::catalog::{
        errors::CatalogServiceError,
        records::{MenuItemRecord, RestaurantRecord},
        repository::PgCatalogRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCatalogService {
    db: Db,
    repository: PgCatalogRepository,
}

impl PgCatalogService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCatalogRepository::new(),
        }
    }
}

#[async_trait]
impl CatalogService for PgCatalogService {
    async fn list_restaurants(&self) -> Result<Vec<RestaurantRecord>, CatalogServiceError> {
        let mut conn = self.db.acquire().await?;

        Ok(self.repository.list_restaurants(&mut conn).await?)
    }

    async fn get_restaurant(
        &self,
        restaurant: String,
    ) -> Result<RestaurantRecord, CatalogServiceError> {
        let mut conn = self.db.acquire().await?;

        Ok(self.repository.get_restaurant(&mut conn, &restaurant).await?)
    }

    async fn search_restaurants(
        &self,
        query: String,
    ) -> Result<Vec<RestaurantRecord>, CatalogServiceError> {
        let term = query.trim();

        let mut conn = self.db.acquire().await?;

        if term.is_empty() {
            return Ok(self.repository.list_restaurants(&mut conn).await?);
        }

        Ok(self.repository.search_restaurants(&mut conn, term).await?)
    }

    async fn list_menu_items(
        &self,
        restaurant: String,
    ) -> Result<Vec<MenuItemRecord>, CatalogServiceError> {
        let mut conn = self.db.acquire().await?;

        Ok(self
            .repository
            .list_menu_items(&mut conn, &restaurant)
            .await?)
    }

    async fn get_menu_item(
        &self,
        restaurant: String,
        item: String,
    ) -> Result<MenuItemRecord, CatalogServiceError> {
        let mut conn = self.db.acquire().await?;

        Ok(self
            .repository
            .get_menu_item(&mut conn, &restaurant, &item)
            .await?)
    }

    async fn find_menu_items(
        &self,
        items: Vec<String>,
    ) -> Result<Vec<MenuItemRecord>, CatalogServiceError> {
        let mut conn = self.db.acquire().await?;

        Ok(self.repository.find_menu_items(&mut conn, &items).await?)
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// All restaurants, highest rated first.
    async fn list_restaurants(&self) -> Result<Vec<RestaurantRecord>, CatalogServiceError>;

    /// A single restaurant by id.
    async fn get_restaurant(
        &self,
        restaurant: String,
    ) -> Result<RestaurantRecord, CatalogServiceError>;

    /// Case-insensitive substring match on name or cuisine. A blank query
    /// returns every restaurant.
    async fn search_restaurants(
        &self,
        query: String,
    ) -> Result<Vec<RestaurantRecord>, CatalogServiceError>;

    /// The menu of one restaurant. Unknown restaurants yield an empty list.
    async fn list_menu_items(
        &self,
        restaurant: String,
    ) -> Result<Vec<MenuItemRecord>, CatalogServiceError>;

    /// A single menu item, scoped to its restaurant.
    async fn get_menu_item(
        &self,
        restaurant: String,
        item: String,
    ) -> Result<MenuItemRecord, CatalogServiceError>;

    /// Menu items by id across all restaurants. Unknown ids are omitted.
    async fn find_menu_items(
        &self,
        items: Vec<String>,
    ) -> Result<Vec<MenuItemRecord>, CatalogServiceError>;
}
