//! Verify Payment Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    payments::{errors::into_status_error, models::VerificationResponse},
    state::State,
};

/// Verify Payment Handler
///
/// Looks up a transaction by reference. Amounts are in major units.
#[endpoint(
    tags("payments"),
    summary = "Verify Payment",
    responses(
        (status_code = StatusCode::OK, description = "Transaction found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed reference"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    reference: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<VerificationResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let verification = state
        .app
        .payments
        .verify_transaction(reference.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(verification.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use dishpatch_app::domain::payments::{
        MockPaymentsService, PaymentsServiceError,
        models::{Customer, PaymentVerification},
        paystack::PaystackError,
    };

    use crate::test_helpers::payments_service;

    use super::*;

    fn make_service(payments: MockPaymentsService) -> Service {
        payments_service(
            payments,
            Router::with_path("verify-payment/{reference}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_verify_returns_transaction() -> TestResult {
        let mut payments = MockPaymentsService::new();

        payments
            .expect_verify_transaction()
            .once()
            .withf(|reference| reference == "T123")
            .return_once(|_| {
                Ok(PaymentVerification {
                    status: "success".to_owned(),
                    amount: Decimal::new(2598, 2),
                    currency: "NGN".to_owned(),
                    reference: "T123".to_owned(),
                    paid_at: Some("2026-01-01T12:00:00.000Z".to_owned()),
                    customer: Some(Customer {
                        email: Some("ada@example.com".to_owned()),
                        ..Customer::default()
                    }),
                    metadata: json!({ "orderId": "abc" }),
                })
            });

        let mut res = TestClient::get("http://example.com/verify-payment/T123")
            .send(&make_service(payments))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(body["status"], "success");
        assert_eq!(body["amount"], 25.98);
        assert_eq!(body["paidAt"], "2026-01-01T12:00:00.000Z");
        assert_eq!(body["customer"]["email"], "ada@example.com");
        assert_eq!(body["metadata"]["orderId"], "abc");

        Ok(())
    }

    #[tokio::test]
    async fn test_verify_malformed_reference_returns_400() {
        let mut payments = MockPaymentsService::new();

        payments.expect_verify_transaction().once().return_once(|_| {
            Err(PaymentsServiceError::InvalidArgument(
                "reference is invalid".to_owned(),
            ))
        });

        let res = TestClient::get("http://example.com/verify-payment/bad%20ref")
            .send(&make_service(payments))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_verify_provider_failure_returns_500() {
        let mut payments = MockPaymentsService::new();

        payments.expect_verify_transaction().once().return_once(|_| {
            Err(PaymentsServiceError::Upstream(PaystackError::Rejected(
                "Transaction reference not found".to_owned(),
            )))
        });

        let res = TestClient::get("http://example.com/verify-payment/T404")
            .send(&make_service(payments))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
