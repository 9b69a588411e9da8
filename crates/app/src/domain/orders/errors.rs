//! Orders service errors.

use rust_decimal::Decimal;
use sqlx::Error;
use thiserror::Error;

use crate::domain::orders::status::OrderStatus;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order not found")]
    NotFound,

    #[error("an order needs at least one item")]
    EmptyOrder,

    #[error("item quantities must be at least 1")]
    InvalidQuantity,

    #[error("unknown menu item: {0}")]
    UnknownMenuItem(String),

    #[error("submitted total {submitted} does not match {expected}")]
    TotalMismatch {
        expected: Decimal,
        submitted: Decimal,
    },

    #[error("invalid order status: {0:?}")]
    InvalidStatus(String),

    #[error("cannot move an order from {from} back to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("payment is already recorded on another order")]
    PaymentAlreadyRecorded,

    #[error("storage error")]
    Sql(#[source] Error),
}

/// Partial unique index over `orders.payment_reference`.
const PAYMENT_REFERENCE_KEY: &str = "orders_payment_reference_key";

impl From<Error> for OrdersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        let reused_reference = error
            .as_database_error()
            .and_then(|db| db.constraint())
            .is_some_and(|constraint| constraint == PAYMENT_REFERENCE_KEY);

        if reused_reference {
            return Self::PaymentAlreadyRecorded;
        }

        Self::Sql(error)
    }
}
