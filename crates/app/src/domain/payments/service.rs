//! Payments service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info, warn};

use crate::domain::{
    orders::{OrdersService, OrdersServiceError, records::OrderUuid},
    payments::{
        errors::PaymentsServiceError,
        models::{
            Bank, Customer, InitializePayment, PaymentSession, PaymentVerification, Refund,
            TransactionPage, TransactionSummary, WebhookOutcome,
        },
        money::{from_minor_units, to_minor_units},
        paystack::{
            CustomerData, InitializeRequest, PaystackClient, RefundRequest, TransactionData,
            is_valid_reference,
        },
        signature,
    },
};

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PER_PAGE: u32 = 50;

/// Largest page size accepted by the provider.
pub const MAX_PER_PAGE: u32 = 100;

/// Only transactions in this state can be refunded.
const REFUNDABLE_STATUS: &str = "success";

#[derive(Clone)]
pub struct PaystackPaymentsService {
    client: PaystackClient,
    orders: Arc<dyn OrdersService>,
    callback_url: String,
}

impl std::fmt::Debug for PaystackPaymentsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaystackPaymentsService")
            .field("client", &self.client)
            .field("callback_url", &self.callback_url)
            .finish_non_exhaustive()
    }
}

impl PaystackPaymentsService {
    /// `frontend_url` is where the provider redirects the customer after
    /// paying, under `/payment/callback`.
    #[must_use]
    pub fn new(client: PaystackClient, orders: Arc<dyn OrdersService>, frontend_url: &str) -> Self {
        Self {
            client,
            orders,
            callback_url: format!("{}/payment/callback", frontend_url.trim_end_matches('/')),
        }
    }

    fn checked_reference(reference: &str) -> Result<&str, PaymentsServiceError> {
        let reference = reference.trim();

        if reference.is_empty() {
            return Err(PaymentsServiceError::invalid("reference is required"));
        }

        if !is_valid_reference(reference) {
            return Err(PaymentsServiceError::invalid("reference is malformed"));
        }

        Ok(reference)
    }

    /// Attaches a successful charge to the order named in its metadata, but
    /// only when the amount paid is exactly the order total. Unknown orders
    /// and mismatched amounts are acknowledged without touching the order;
    /// storage failures are returned so the provider redelivers.
    async fn record_charge(
        &self,
        data: WebhookData,
    ) -> Result<WebhookOutcome, PaymentsServiceError> {
        let order = data
            .metadata
            .get("orderId")
            .and_then(Value::as_str)
            .and_then(|id| id.parse::<OrderUuid>().ok());

        let Some(order) = order else {
            info!(reference = %data.reference, "charge succeeded without an order id");

            return Ok(WebhookOutcome::PaymentUnmatched {
                reference: data.reference,
            });
        };

        let record = match self.orders.get_order(order).await {
            Ok(record) => record,
            Err(OrdersServiceError::NotFound) => {
                warn!(%order, reference = %data.reference, "charge succeeded for unknown order");

                return Ok(WebhookOutcome::PaymentUnmatched {
                    reference: data.reference,
                });
            }
            Err(error) => return Err(error.into()),
        };

        if to_minor_units(record.total) != Some(data.amount) {
            warn!(
                %order,
                reference = %data.reference,
                paid = data.amount,
                currency = %data.currency,
                total = %record.total,
                "charge amount does not match order total"
            );

            return Ok(WebhookOutcome::PaymentUnmatched {
                reference: data.reference,
            });
        }

        match self
            .orders
            .record_payment(order, data.reference.clone())
            .await
        {
            Ok(_) => Ok(WebhookOutcome::PaymentRecorded {
                order,
                reference: data.reference,
            }),
            Err(OrdersServiceError::NotFound) => {
                warn!(%order, reference = %data.reference, "order disappeared before payment was recorded");

                Ok(WebhookOutcome::PaymentUnmatched {
                    reference: data.reference,
                })
            }
            Err(OrdersServiceError::PaymentAlreadyRecorded) => {
                warn!(%order, reference = %data.reference, "charge already settles another order");

                Ok(WebhookOutcome::PaymentUnmatched {
                    reference: data.reference,
                })
            }
            Err(error) => Err(error.into()),
        }
    }
}

#[async_trait]
impl PaymentsService for PaystackPaymentsService {
    async fn initialize_transaction(
        &self,
        payment: InitializePayment,
    ) -> Result<PaymentSession, PaymentsServiceError> {
        let email = payment.email.trim();

        if email.is_empty() {
            return Err(PaymentsServiceError::invalid("email is required"));
        }

        if !email.contains('@') {
            return Err(PaymentsServiceError::invalid("email is invalid"));
        }

        let amount = to_minor_units(payment.amount)
            .filter(|amount| *amount > 0)
            .ok_or_else(|| PaymentsServiceError::invalid("amount must be greater than zero"))?;

        let metadata = json!({
            "orderId": payment.order_id.unwrap_or_default(),
            "itemCount": payment.item_count,
            "callback_url": self.callback_url,
        });

        let data = self
            .client
            .initialize_transaction(&InitializeRequest {
                email,
                amount,
                callback_url: &self.callback_url,
                metadata,
            })
            .await?;

        info!(reference = %data.reference, amount, "payment initialized");

        Ok(PaymentSession {
            authorization_url: data.authorization_url,
            access_code: data.access_code,
            reference: data.reference,
        })
    }

    async fn verify_transaction(
        &self,
        reference: String,
    ) -> Result<PaymentVerification, PaymentsServiceError> {
        let reference = Self::checked_reference(&reference)?;

        let data = self.client.verify_transaction(reference).await?;

        Ok(verification(data))
    }

    async fn list_transactions(
        &self,
        per_page: Option<u32>,
        page: Option<u32>,
    ) -> Result<TransactionPage, PaymentsServiceError> {
        let (per_page, page) = paging(per_page, page);

        let (transactions, meta) = self.client.list_transactions(per_page, page).await?;

        Ok(TransactionPage {
            transactions: transactions.into_iter().map(summary).collect(),
            meta,
        })
    }

    async fn process_refund(
        &self,
        reference: String,
        amount: Option<Decimal>,
    ) -> Result<Refund, PaymentsServiceError> {
        let reference = Self::checked_reference(&reference)?;

        let transaction = self.client.verify_transaction(reference).await?;

        if transaction.status != REFUNDABLE_STATUS {
            return Err(PaymentsServiceError::NotRefundable(transaction.status));
        }

        let partial = match amount {
            Some(amount) => {
                let minor = to_minor_units(amount)
                    .filter(|minor| *minor > 0)
                    .ok_or_else(|| {
                        PaymentsServiceError::invalid("refund amount must be greater than zero")
                    })?;

                if minor > transaction.amount {
                    return Err(PaymentsServiceError::invalid(
                        "refund amount exceeds the amount paid",
                    ));
                }

                Some(minor)
            }
            None => None,
        };

        let (refund, message) = self
            .client
            .create_refund(&RefundRequest {
                transaction: reference,
                amount: partial,
            })
            .await?;

        let refunded = refund.amount.or(partial).unwrap_or(transaction.amount);

        info!(reference, amount = refunded, status = %refund.status, "refund requested");

        Ok(Refund {
            reference: reference.to_string(),
            amount: from_minor_units(refunded),
            status: refund.status,
            message,
        })
    }

    async fn list_banks(&self) -> Result<Vec<Bank>, PaymentsServiceError> {
        let banks = self.client.list_banks().await?;

        Ok(banks
            .into_iter()
            .map(|bank| Bank {
                id: bank.id,
                name: bank.name,
                code: bank.code,
                slug: bank.slug,
            })
            .collect())
    }

    fn verify_signature(&self, payload: &[u8], signature: &str) -> bool {
        signature::verify(
            self.client.secret_key().expose().as_bytes(),
            payload,
            signature,
        )
    }

    async fn handle_webhook(
        &self,
        payload: Vec<u8>,
        signature: String,
    ) -> Result<WebhookOutcome, PaymentsServiceError> {
        if !self.verify_signature(&payload, &signature) {
            return Err(PaymentsServiceError::InvalidSignature);
        }

        let event: WebhookEvent = serde_json::from_slice(&payload)
            .map_err(|error| PaymentsServiceError::invalid(format!("malformed event: {error}")))?;

        let outcome = match event.event.as_str() {
            "charge.success" => self.record_charge(event.data).await?,
            "charge.failed" => {
                warn!(reference = %event.data.reference, "charge failed");

                WebhookOutcome::ChargeFailed {
                    reference: event.data.reference,
                }
            }
            _ => {
                debug!(event = %event.event, "ignoring webhook event");

                WebhookOutcome::Ignored { event: event.event }
            }
        };

        Ok(outcome)
    }
}

#[automock]
#[async_trait]
pub trait PaymentsService: Send + Sync {
    /// Starts a hosted checkout for `payment.amount` and returns where to
    /// send the customer.
    async fn initialize_transaction(
        &self,
        payment: InitializePayment,
    ) -> Result<PaymentSession, PaymentsServiceError>;

    /// Looks up a transaction by its reference.
    async fn verify_transaction(
        &self,
        reference: String,
    ) -> Result<PaymentVerification, PaymentsServiceError>;

    /// Lists provider transactions. `per_page` defaults to 50 and is clamped
    /// to 1..=100; `page` defaults to 1.
    async fn list_transactions(
        &self,
        per_page: Option<u32>,
        page: Option<u32>,
    ) -> Result<TransactionPage, PaymentsServiceError>;

    /// Refunds a successful transaction in full, or partially when `amount`
    /// is given.
    async fn process_refund(
        &self,
        reference: String,
        amount: Option<Decimal>,
    ) -> Result<Refund, PaymentsServiceError>;

    /// Banks supported by the provider.
    async fn list_banks(&self) -> Result<Vec<Bank>, PaymentsServiceError>;

    /// Whether `signature` is the provider's signature over `payload`.
    fn verify_signature(&self, payload: &[u8], signature: &str) -> bool;

    /// Authenticates and applies a webhook delivery. `payload` must be the
    /// request body exactly as received.
    async fn handle_webhook(
        &self,
        payload: Vec<u8>,
        signature: String,
    ) -> Result<WebhookOutcome, PaymentsServiceError>;
}

#[derive(Debug, Deserialize)]
struct WebhookEvent {
    event: String,
    #[serde(default)]
    data: WebhookData,
}

#[derive(Debug, Default, Deserialize)]
struct WebhookData {
    #[serde(default)]
    reference: String,
    /// Amount charged, in minor units.
    #[serde(default)]
    amount: i64,
    #[serde(default)]
    currency: String,
    #[serde(default)]
    metadata: Value,
}

fn paging(per_page: Option<u32>, page: Option<u32>) -> (u32, u32) {
    (
        per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE),
        page.unwrap_or(1).max(1),
    )
}

fn customer(data: CustomerData) -> Customer {
    Customer {
        id: data.id,
        email: data.email,
        first_name: data.first_name,
        last_name: data.last_name,
        customer_code: data.customer_code,
        phone: data.phone,
    }
}

fn verification(data: TransactionData) -> PaymentVerification {
    PaymentVerification {
        status: data.status,
        amount: from_minor_units(data.amount),
        currency: data.currency,
        reference: data.reference,
        paid_at: data.paid_at,
        customer: data.customer.map(customer),
        metadata: data.metadata,
    }
}

fn summary(data: TransactionData) -> TransactionSummary {
    TransactionSummary {
        reference: data.reference,
        amount: from_minor_units(data.amount),
        status: data.status,
        paid_at: data.paid_at,
        customer: data.customer.map(customer),
    }
}
