//! Order JSON models

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use dishpatch_app::domain::orders::records::{OrderItemRecord, OrderRecord};

/// Order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemResponse {
    /// Menu item id
    pub id: String,

    /// Menu item name when the order was placed
    pub name: String,

    /// Unit price when the order was placed
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    pub quantity: i32,
}

impl From<OrderItemRecord> for OrderItemResponse {
    fn from(item: OrderItemRecord) -> Self {
        Self {
            id: item.item_id,
            name: item.name,
            price: item.price,
            quantity: item.quantity,
        }
    }
}

/// Order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderResponse {
    pub id: Uuid,

    pub user_id: Option<String>,

    /// One of `preparing`, `on-the-way`, `delivered`
    pub status: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub total: Decimal,

    /// Delivery estimate, e.g. `25-35 min`
    pub estimated_time: String,

    /// Payment provider reference, once paid
    pub payment_reference: Option<String>,

    pub items: Vec<OrderItemResponse>,

    pub created_at: String,

    pub updated_at: String,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        Self {
            id: order.uuid.into_uuid(),
            user_id: order.user_id,
            status: order.status.as_str().to_owned(),
            total: order.total,
            estimated_time: order.estimated_time,
            payment_reference: order.payment_reference,
            items: order.items.into_iter().map(Into::into).collect(),
            created_at: order.created_at.to_string(),
            updated_at: order.updated_at.to_string(),
        }
    }
}
