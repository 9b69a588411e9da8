//! Payment Errors

use salvo::http::StatusError;
use tracing::{error, warn};

use dishpatch_app::domain::payments::PaymentsServiceError;

use crate::orders;

pub(crate) fn into_status_error(error: PaymentsServiceError) -> StatusError {
    match error {
        PaymentsServiceError::InvalidArgument(message) => {
            StatusError::bad_request().brief(message)
        }
        PaymentsServiceError::InvalidSignature => {
            warn!("rejected webhook with invalid signature");

            StatusError::bad_request().brief("Invalid signature")
        }
        PaymentsServiceError::NotRefundable(status) => StatusError::conflict()
            .brief(format!("Transaction with status {status} cannot be refunded")),
        PaymentsServiceError::Upstream(source) => {
            error!("payment provider request failed: {source}");

            StatusError::internal_server_error()
        }
        PaymentsServiceError::Orders(source) => orders::errors::into_status_error(source),
    }
}
