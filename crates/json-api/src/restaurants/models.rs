//! Catalog JSON models

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use dishpatch_app::domain::catalog::records::{MenuItemRecord, RestaurantRecord};

/// Restaurant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RestaurantResponse {
    pub id: String,
    pub name: String,
    pub cuisine: String,

    /// Average rating, 0 to 5
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub rating: Decimal,

    /// Delivery estimate, e.g. `25-35 min`
    pub delivery_time: String,

    /// Image URL
    pub image: String,
}

impl From<RestaurantRecord> for RestaurantResponse {
    fn from(record: RestaurantRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            cuisine: record.cuisine,
            rating: record.rating,
            delivery_time: record.delivery_time,
            image: record.image,
        }
    }
}

/// Menu item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MenuItemResponse {
    pub id: String,
    pub restaurant_id: String,
    pub name: String,
    pub description: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    pub image: String,
}

impl From<MenuItemRecord> for MenuItemResponse {
    fn from(record: MenuItemRecord) -> Self {
        Self {
            id: record.id,
            restaurant_id: record.restaurant_id,
            name: record.name,
            description: record.description,
            price: record.price,
            image: record.image,
        }
    }
}
