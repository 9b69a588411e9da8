//! Order Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{domain::orders::status::OrderStatus, uuids::TypedUuid};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Order Record
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    pub user_id: Option<String>,
    pub status: OrderStatus,
    /// Σ price × quantity over `items`, in major currency units.
    pub total: Decimal,
    pub estimated_time: String,
    pub payment_reference: Option<String>,
    /// Lines in the order they were submitted.
    pub items: Vec<OrderItemRecord>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Order Item UUID
pub type OrderItemUuid = TypedUuid<OrderItemRecord>;

/// Order Item Record
///
/// `name` and `price` are copied from the menu when the order is placed and
/// never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItemRecord {
    pub uuid: OrderItemUuid,
    pub order_uuid: OrderUuid,
    /// Menu item id at the time of ordering.
    pub item_id: String,
    pub name: String,
    pub price: Decimal,
    pub quantity: i32,
    pub position: i32,
    pub created_at: Timestamp,
}
