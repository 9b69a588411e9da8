//! Payment JSON models

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use dishpatch_app::domain::payments::models::{
    Bank, Customer, PaymentSession, PaymentVerification, Refund, TransactionPage,
    TransactionSummary,
};

/// Hosted checkout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaymentSessionResponse {
    /// Where to send the customer to pay
    pub authorization_url: String,
    pub access_code: String,
    pub reference: String,
}

impl From<PaymentSession> for PaymentSessionResponse {
    fn from(session: PaymentSession) -> Self {
        Self {
            authorization_url: session.authorization_url,
            access_code: session.access_code,
            reference: session.reference,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CustomerResponse {
    pub id: Option<i64>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub customer_code: Option<String>,
    pub phone: Option<String>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            email: customer.email,
            first_name: customer.first_name,
            last_name: customer.last_name,
            customer_code: customer.customer_code,
            phone: customer.phone,
        }
    }
}

/// Transaction as reported by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VerificationResponse {
    /// Provider status, e.g. `success`, `failed`, `abandoned`
    pub status: String,

    /// Amount in major currency units
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub amount: Decimal,

    pub currency: String,
    pub reference: String,
    pub paid_at: Option<String>,
    pub customer: Option<CustomerResponse>,

    /// Metadata attached when the payment was initialized
    #[salvo(schema(value_type = Object))]
    pub metadata: Value,
}

impl From<PaymentVerification> for VerificationResponse {
    fn from(verification: PaymentVerification) -> Self {
        Self {
            status: verification.status,
            amount: verification.amount,
            currency: verification.currency,
            reference: verification.reference,
            paid_at: verification.paid_at,
            customer: verification.customer.map(Into::into),
            metadata: verification.metadata,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TransactionResponse {
    pub reference: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub amount: Decimal,

    pub status: String,
    pub paid_at: Option<String>,
    pub customer: Option<CustomerResponse>,
}

impl From<TransactionSummary> for TransactionResponse {
    fn from(transaction: TransactionSummary) -> Self {
        Self {
            reference: transaction.reference,
            amount: transaction.amount,
            status: transaction.status,
            paid_at: transaction.paid_at,
            customer: transaction.customer.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct TransactionsResponse {
    pub transactions: Vec<TransactionResponse>,

    /// Provider paging block, passed through unchanged
    #[salvo(schema(value_type = Object))]
    pub meta: Option<Value>,
}

impl From<TransactionPage> for TransactionsResponse {
    fn from(page: TransactionPage) -> Self {
        Self {
            transactions: page.transactions.into_iter().map(Into::into).collect(),
            meta: page.meta,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct RefundResponse {
    /// Reference of the refunded transaction
    pub reference: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub amount: Decimal,

    /// Provider refund status, e.g. `pending` or `processed`
    pub status: String,

    pub message: String,
}

impl From<Refund> for RefundResponse {
    fn from(refund: Refund) -> Self {
        Self {
            reference: refund.reference,
            amount: refund.amount,
            status: refund.status,
            message: refund.message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct BankResponse {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub slug: String,
}

impl From<Bank> for BankResponse {
    fn from(bank: Bank) -> Self {
        Self {
            id: bank.id,
            name: bank.name,
            code: bank.code,
            slug: bank.slug,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct BanksResponse {
    pub banks: Vec<BankResponse>,
}
