//! Refund Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    extensions::*,
    payments::{errors::into_status_error, models::RefundResponse},
    state::State,
};

/// Refund Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RefundRequest {
    /// Reference of the transaction to refund
    #[serde(default)]
    pub reference: String,

    /// Partial amount in major units; the full amount when omitted
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[salvo(schema(value_type = Option<f64>))]
    pub amount: Option<Decimal>,
}

/// Refund Handler
///
/// Refunds a successful transaction in full or in part.
#[endpoint(
    tags("payments"),
    summary = "Refund Payment",
    responses(
        (status_code = StatusCode::OK, description = "Refund requested"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing reference or invalid amount"),
        (status_code = StatusCode::CONFLICT, description = "Transaction cannot be refunded"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[instrument(name = "payments.refund", skip_all)]
pub(crate) async fn handler(
    json: JsonBody<RefundRequest>,
    depot: &mut Depot,
) -> Result<Json<RefundResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let refund = state
        .app
        .payments
        .process_refund(request.reference, request.amount)
        .await
        .map_err(into_status_error)?;

    Ok(Json(refund.into()))
}
