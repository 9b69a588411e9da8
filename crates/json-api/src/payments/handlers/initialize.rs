//! Initialize Payment Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use dishpatch_app::domain::payments::models::InitializePayment;

use crate::{
    extensions::*,
    payments::{errors::into_status_error, models::PaymentSessionResponse},
    state::State,
};

/// Initialize Payment Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InitializePaymentRequest {
    /// Customer email
    #[serde(default)]
    pub email: String,

    /// Amount in major currency units
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[salvo(schema(value_type = Option<f64>))]
    pub amount: Option<Decimal>,

    /// Order the payment is for, echoed back in webhook metadata
    #[serde(default)]
    pub order_id: Option<String>,

    /// Cart lines; only their count is forwarded
    #[serde(default)]
    #[salvo(schema(value_type = Option<Vec<Object>>))]
    pub items: Option<Vec<Value>>,
}

/// Initialize Payment Handler
///
/// Starts a hosted checkout and returns where to send the customer.
#[endpoint(
    tags("payments"),
    summary = "Initialize Payment",
    responses(
        (status_code = StatusCode::OK, description = "Checkout started"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing email or amount"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[instrument(name = "payments.initialize", skip_all)]
pub(crate) async fn handler(
    json: JsonBody<InitializePaymentRequest>,
    depot: &mut Depot,
) -> Result<Json<PaymentSessionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let amount = request
        .amount
        .ok_or_else(|| StatusError::bad_request().brief("Email and valid amount required"))?;

    let session = state
        .app
        .payments
        .initialize_transaction(InitializePayment {
            email: request.email,
            amount,
            order_id: request.order_id.filter(|id| !id.is_empty()),
            item_count: request.items.map_or(0, |items| items.len()),
        })
        .await
        .map_err(into_status_error)?;

    Ok(Json(session.into()))
}
