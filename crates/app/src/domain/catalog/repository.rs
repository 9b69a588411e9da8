//! Catalog Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgConnection, Postgres, Row, postgres::PgRow, query_as};

use crate::domain::catalog::records::{MenuItemRecord, RestaurantRecord};

const LIST_RESTAURANTS_SQL: &str = include_str!("sql/list_restaurants.sql");
const GET_RESTAURANT_SQL: &str = include_str!("sql/get_restaurant.sql");
const SEARCH_RESTAURANTS_SQL: &str = include_str!("sql/search_restaurants.sql");
const LIST_MENU_ITEMS_SQL: &str = include_str!("sql/list_menu_items.sql");
const GET_MENU_ITEM_SQL: &str = include_str!("sql/get_menu_item.sql");
const FIND_MENU_ITEMS_SQL: &str = include_str!("sql/find_menu_items.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCatalogRepository;

impl PgCatalogRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_restaurants(
        &self,
        conn: &mut PgConnection,
    ) -> Result<Vec<RestaurantRecord>, sqlx::Error> {
        query_as::<Postgres, RestaurantRecord>(LIST_RESTAURANTS_SQL)
            .fetch_all(&mut *conn)
            .await
    }

    pub(crate) async fn get_restaurant(
        &self,
        conn: &mut PgConnection,
        restaurant: &str,
    ) -> Result<RestaurantRecord, sqlx::Error> {
        query_as::<Postgres, RestaurantRecord>(GET_RESTAURANT_SQL)
            .bind(restaurant)
            .fetch_one(&mut *conn)
            .await
    }

    /// `term` is matched literally as a substring of name or cuisine.
    pub(crate) async fn search_restaurants(
        &self,
        conn: &mut PgConnection,
        term: &str,
    ) -> Result<Vec<RestaurantRecord>, sqlx::Error> {
        query_as::<Postgres, RestaurantRecord>(SEARCH_RESTAURANTS_SQL)
            .bind(contains_pattern(term))
            .fetch_all(&mut *conn)
            .await
    }

    pub(crate) async fn list_menu_items(
        &self,
        conn: &mut PgConnection,
        restaurant: &str,
    ) -> Result<Vec<MenuItemRecord>, sqlx::Error> {
        query_as::<Postgres, MenuItemRecord>(LIST_MENU_ITEMS_SQL)
            .bind(restaurant)
            .fetch_all(&mut *conn)
            .await
    }

    pub(crate) async fn get_menu_item(
        &self,
        conn: &mut PgConnection,
        restaurant: &str,
        item: &str,
    ) -> Result<MenuItemRecord, sqlx::Error> {
        query_as::<Postgres, MenuItemRecord>(GET_MENU_ITEM_SQL)
            .bind(restaurant)
            .bind(item)
            .fetch_one(&mut *conn)
            .await
    }

    pub(crate) async fn find_menu_items(
        &self,
        conn: &mut PgConnection,
        items: &[String],
    ) -> Result<Vec<MenuItemRecord>, sqlx::Error> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        query_as::<Postgres, MenuItemRecord>(FIND_MENU_ITEMS_SQL)
            .bind(items)
            .fetch_all(&mut *conn)
            .await
    }
}

/// Build an `ILIKE` pattern matching `term` anywhere, with LIKE metacharacters
/// escaped.
pub(crate) fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);

    pattern.push('%');

    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }

        pattern.push(ch);
    }

    pattern.push('%');

    pattern
}

impl<'r> FromRow<'r, PgRow> for RestaurantRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            cuisine: row.try_get("cuisine")?,
            rating: row.try_get("rating")?,
            delivery_time: row.try_get("delivery_time")?,
            image: row.try_get("image")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for MenuItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            restaurant_id: row.try_get("restaurant_id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            image: row.try_get("image")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
