//! Catalog Records

use jiff::Timestamp;
use rust_decimal::Decimal;

/// Restaurant Record
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantRecord {
    pub id: String,
    pub name: String,
    /// Free-text, comma separated cuisine tags.
    pub cuisine: String,
    /// Average rating between 0 and 5.
    pub rating: Decimal,
    /// Display estimate, e.g. `"25-35 min"`.
    pub delivery_time: String,
    pub image: String,
    pub created_at: Timestamp,
}

/// Menu Item Record
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemRecord {
    pub id: String,
    pub restaurant_id: String,
    pub name: String,
    pub description: String,
    /// Price in major currency units.
    pub price: Decimal,
    pub image: String,
    pub created_at: Timestamp,
}
