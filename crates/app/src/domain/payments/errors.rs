//! Payments service errors.

use thiserror::Error;

use crate::domain::{orders::OrdersServiceError, payments::paystack::PaystackError};

#[derive(Debug, Error)]
pub enum PaymentsServiceError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("webhook signature does not match")]
    InvalidSignature,

    #[error("transaction with status {0:?} cannot be refunded")]
    NotRefundable(String),

    #[error("payment provider error")]
    Upstream(#[from] PaystackError),

    #[error("order update failed")]
    Orders(#[from] OrdersServiceError),
}

impl PaymentsServiceError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
