//! Update Order Status Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use dishpatch_app::domain::orders::OrderStatus;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, models::OrderResponse},
    state::State,
};

use super::parse_order_id;

/// Update Order Status Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateStatusRequest {
    /// One of `preparing`, `on-the-way`, `delivered`
    pub status: String,
}

/// Update Order Status Handler
///
/// Orders only move forward: `preparing`, then `on-the-way`, then
/// `delivered`. Repeating the current status is accepted.
#[endpoint(
    tags("orders"),
    summary = "Update Order Status",
    responses(
        (status_code = StatusCode::OK, description = "Order updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid status or order id"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::CONFLICT, description = "Order cannot move backwards"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[instrument(name = "orders.update_status", skip_all)]
pub(crate) async fn handler(
    order: PathParam<String>,
    json: JsonBody<UpdateStatusRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let order = parse_order_id(&order.into_inner())?;

    let status = json
        .into_inner()
        .status
        .parse::<OrderStatus>()
        .map_err(into_status_error)?;

    let order = state
        .app
        .orders
        .update_status(order, status)
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}
