//! Order Errors

use salvo::http::StatusError;
use tracing::{error, warn};

use dishpatch_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::EmptyOrder => {
            StatusError::bad_request().brief("Order must contain items")
        }
        OrdersServiceError::InvalidQuantity => {
            StatusError::bad_request().brief("Item quantities must be at least 1")
        }
        OrdersServiceError::UnknownMenuItem(item) => {
            StatusError::bad_request().brief(format!("Unknown menu item: {item}"))
        }
        OrdersServiceError::TotalMismatch {
            expected,
            submitted,
        } => {
            warn!(%expected, %submitted, "rejected order with mismatched total");

            StatusError::bad_request().brief("Order total does not match menu prices")
        }
        OrdersServiceError::InvalidStatus(_) => StatusError::bad_request().brief("Invalid status"),
        OrdersServiceError::InvalidTransition { from, to } => {
            StatusError::conflict().brief(format!("Cannot move order from {from} to {to}"))
        }
        OrdersServiceError::PaymentAlreadyRecorded => {
            StatusError::conflict().brief("Payment is already recorded on another order")
        }
        OrdersServiceError::Sql(source) => {
            error!("order storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::http::StatusCode;

    use dishpatch_app::domain::orders::OrderStatus;

    use super::*;

    #[test]
    fn validation_failures_are_400() {
        let errors = [
            OrdersServiceError::EmptyOrder,
            OrdersServiceError::InvalidQuantity,
            OrdersServiceError::UnknownMenuItem("m99".to_owned()),
            OrdersServiceError::TotalMismatch {
                expected: Decimal::new(2598, 2),
                submitted: Decimal::new(100, 2),
            },
            OrdersServiceError::InvalidStatus("flying".to_owned()),
        ];

        for error in errors {
            assert_eq!(into_status_error(error).code, StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn backwards_transition_is_409() {
        let error = OrdersServiceError::InvalidTransition {
            from: OrderStatus::Delivered,
            to: OrderStatus::Preparing,
        };

        assert_eq!(into_status_error(error).code, StatusCode::CONFLICT);
    }

    #[test]
    fn reused_payment_reference_is_409() {
        assert_eq!(
            into_status_error(OrdersServiceError::PaymentAlreadyRecorded).code,
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn not_found_is_404_and_storage_is_500() {
        assert_eq!(
            into_status_error(OrdersServiceError::NotFound).code,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            into_status_error(OrdersServiceError::Sql(sqlx::Error::PoolTimedOut)).code,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
