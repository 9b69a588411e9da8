//! Create Order Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use dishpatch_app::domain::{
    orders::data::{NewOrder, NewOrderItem},
    payments::{PaymentsServiceError, models::PaymentVerification, paystack::PaystackError},
};

use crate::{
    extensions::*,
    observability::record_order_created,
    orders::{errors::into_status_error, models::OrderResponse},
    payments,
    state::State,
};

/// Provider status of a settled transaction.
const PAID_STATUS: &str = "success";

/// Order line as submitted by the client
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateOrderItemRequest {
    /// Menu item id
    pub id: String,

    /// Display name seen by the client. The menu's name is stored.
    #[serde(default)]
    pub name: Option<String>,

    /// Unit price seen by the client. The menu's price is stored.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[salvo(schema(value_type = Option<f64>))]
    pub price: Option<Decimal>,

    pub quantity: i32,
}

/// Create Order Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateOrderRequest {
    pub items: Vec<CreateOrderItemRequest>,

    /// Total seen by the client. Must match menu prices to within a cent.
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub total: Decimal,

    #[serde(default)]
    pub user_id: Option<String>,

    /// Reference of a successful payment for exactly `total`. It is checked
    /// with the provider before the order is stored.
    #[serde(default)]
    pub payment_reference: Option<String>,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(request: CreateOrderRequest) -> Self {
        NewOrder {
            items: request
                .items
                .into_iter()
                .map(|item| NewOrderItem {
                    item_id: item.id,
                    quantity: item.quantity,
                })
                .collect(),
            total: request.total,
            user_id: request.user_id,
            payment_reference: request.payment_reference,
        }
    }
}

/// Checks `reference` with the provider and that it paid `total` in full.
async fn verified_payment(
    state: &State,
    reference: String,
    total: Decimal,
) -> Result<PaymentVerification, StatusError> {
    let payment = state
        .app
        .payments
        .verify_transaction(reference)
        .await
        .map_err(|error| match error {
            PaymentsServiceError::Upstream(PaystackError::Rejected(message)) => {
                warn!(%message, "payment reference rejected by provider");

                StatusError::bad_request().brief("Payment could not be verified")
            }
            error => payments::errors::into_status_error(error),
        })?;

    if payment.status != PAID_STATUS {
        warn!(reference = %payment.reference, status = %payment.status, "order submitted with unpaid reference");

        return Err(StatusError::bad_request().brief("Payment has not succeeded"));
    }

    if payment.amount != total {
        warn!(
            reference = %payment.reference,
            paid = %payment.amount,
            %total,
            "order submitted with payment for a different amount"
        );

        return Err(StatusError::bad_request().brief("Payment amount does not match order total"));
    }

    Ok(payment)
}

/// Create Order Handler
///
/// Prices every line from the menu and stores the order with all of its
/// items, or nothing. A payment reference is verified with the provider
/// first.
#[endpoint(
    tags("orders"),
    summary = "Create Order",
    responses(
        (status_code = StatusCode::CREATED, description = "Order created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::CONFLICT, description = "Payment already settles another order"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[instrument(name = "orders.create", skip_all)]
pub(crate) async fn handler(
    json: JsonBody<CreateOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let mut new_order: NewOrder = json.into_inner().into();

    if let Some(reference) = new_order.payment_reference.take() {
        let payment = verified_payment(state, reference, new_order.total).await?;

        new_order.payment_reference = Some(payment.reference);
    }

    let order = state
        .app
        .orders
        .create_order(new_order)
        .await
        .map_err(into_status_error)?;

    record_order_created();

    res.add_header(LOCATION, format!("/api/orders/{}", order.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
}
