//! Payment Models

use rust_decimal::Decimal;
use serde_json::Value;

use crate::domain::orders::records::OrderUuid;

/// Request to start a hosted checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct InitializePayment {
    pub email: String,
    /// Amount in major currency units.
    pub amount: Decimal,
    pub order_id: Option<String>,
    pub item_count: usize,
}

/// Where to send the customer to pay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentSession {
    pub authorization_url: String,
    pub access_code: String,
    pub reference: String,
}

/// Customer details as reported by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Customer {
    pub id: Option<i64>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub customer_code: Option<String>,
    pub phone: Option<String>,
}

/// Result of looking up a transaction by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentVerification {
    /// Provider status, e.g. `success`, `failed`, `abandoned`.
    pub status: String,
    pub amount: Decimal,
    pub currency: String,
    pub reference: String,
    pub paid_at: Option<String>,
    pub customer: Option<Customer>,
    pub metadata: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionSummary {
    pub reference: String,
    pub amount: Decimal,
    pub status: String,
    pub paid_at: Option<String>,
    pub customer: Option<Customer>,
}

/// One page of transactions. `meta` is the provider's paging block, passed
/// through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionPage {
    pub transactions: Vec<TransactionSummary>,
    pub meta: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Refund {
    /// Reference of the refunded transaction.
    pub reference: String,
    pub amount: Decimal,
    /// Provider refund status, e.g. `pending` or `processed`.
    pub status: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bank {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub slug: String,
}

/// What a verified webhook delivery led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookOutcome {
    /// `charge.success` for a known order; the reference is now on the order.
    PaymentRecorded { order: OrderUuid, reference: String },

    /// `charge.success` that was acknowledged but not recorded: no usable
    /// order id, an unknown order, an amount other than the order total, or a
    /// reference already settling another order.
    PaymentUnmatched { reference: String },

    /// `charge.failed`.
    ChargeFailed { reference: String },

    /// Any other event.
    Ignored { event: String },
}

impl WebhookOutcome {
    /// The provider event name this outcome was produced for.
    #[must_use]
    pub fn event(&self) -> &str {
        match self {
            Self::PaymentRecorded { .. } | Self::PaymentUnmatched { .. } => "charge.success",
            Self::ChargeFailed { .. } => "charge.failed",
            Self::Ignored { event } => event,
        }
    }
}
