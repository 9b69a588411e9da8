//! Order Data

use rust_decimal::Decimal;

/// New Order Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub items: Vec<NewOrderItem>,
    /// Total as computed by the client. Checked against catalog prices.
    pub total: Decimal,
    pub user_id: Option<String>,
    pub payment_reference: Option<String>,
}

/// New Order Item Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderItem {
    /// Menu item id.
    pub item_id: String,
    pub quantity: i32,
}
