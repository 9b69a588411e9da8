//! Payment Webhook Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use dishpatch_app::domain::payments::{models::WebhookOutcome, signature::SIGNATURE_HEADER};

use crate::{
    extensions::*, observability::record_webhook_event, payments::errors::into_status_error,
    state::State,
};

/// Webhook acknowledgement
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct WebhookResponse {
    pub received: bool,

    /// Provider event name that was handled
    pub event: String,
}

/// Payment Webhook Handler
///
/// Accepts provider events signed with HMAC-SHA512 over the raw body in the
/// `x-paystack-signature` header. A successful charge records the payment
/// reference on its order.
#[endpoint(
    tags("payments"),
    summary = "Payment Webhook",
    responses(
        (status_code = StatusCode::OK, description = "Event accepted"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid signature or payload"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[instrument(name = "payments.webhook", skip_all)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<WebhookResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let signature = req
        .header::<String>(SIGNATURE_HEADER)
        .unwrap_or_default();

    let payload = req
        .payload()
        .await
        .or_400("could not read webhook body")?
        .to_vec();

    let outcome = state
        .app
        .payments
        .handle_webhook(payload, signature)
        .await
        .map_err(into_status_error)?;

    record_webhook_event(outcome.event());

    if let WebhookOutcome::PaymentRecorded { order, reference } = &outcome {
        info!(%order, %reference, "payment recorded from webhook");
    }

    Ok(Json(WebhookResponse {
        received: true,
        event: outcome.event().to_owned(),
    }))
}
