//! Order Handlers

use salvo::prelude::StatusError;

use dishpatch_app::domain::orders::records::OrderUuid;

use crate::extensions::*;

pub(crate) mod create;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update_status;

fn parse_order_id(raw: &str) -> Result<OrderUuid, StatusError> {
    raw.parse::<OrderUuid>().or_400("Invalid order id")
}
