//! Banks Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    payments::{errors::into_status_error, models::BanksResponse},
    state::State,
};

/// Banks Handler
///
/// Banks supported by the payment provider.
#[endpoint(
    tags("payments"),
    summary = "List Banks",
    responses(
        (status_code = StatusCode::OK, description = "Banks"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<BanksResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let banks = state
        .app
        .payments
        .list_banks()
        .await
        .map_err(into_status_error)?;

    Ok(Json(BanksResponse {
        banks: banks.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use dishpatch_app::domain::payments::{
        MockPaymentsService, PaymentsServiceError, models::Bank, paystack::PaystackError,
    };

    use crate::{payments::models::BankResponse, test_helpers::payments_service};

    use super::*;

    fn make_service(payments: MockPaymentsService) -> Service {
        payments_service(payments, Router::with_path("banks").get(handler))
    }

    #[tokio::test]
    async fn test_banks_returns_200() -> TestResult {
        let mut payments = MockPaymentsService::new();

        payments.expect_list_banks().once().return_once(|| {
            Ok(vec![Bank {
                id: 1,
                name: "Access Bank".to_owned(),
                code: "044".to_owned(),
                slug: "access-bank".to_owned(),
            }])
        });

        let mut res = TestClient::get("http://example.com/banks")
            .send(&make_service(payments))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: BanksResponse = res.take_json().await?;

        assert_eq!(
            body.banks,
            [BankResponse {
                id: 1,
                name: "Access Bank".to_owned(),
                code: "044".to_owned(),
                slug: "access-bank".to_owned(),
            }]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_banks_provider_failure_returns_500() {
        let mut payments = MockPaymentsService::new();

        payments.expect_list_banks().once().return_once(|| {
            Err(PaymentsServiceError::Upstream(PaystackError::UnexpectedResponse(
                "missing data".to_owned(),
            )))
        });

        let res = TestClient::get("http://example.com/banks")
            .send(&make_service(payments))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
