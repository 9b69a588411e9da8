//! Transactions Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    payments::{errors::into_status_error, models::TransactionsResponse},
    state::State,
};

/// Transactions Index Handler
///
/// Lists provider transactions. `perPage` defaults to 50 and is capped at
/// 100; `page` defaults to 1. Unparseable values fall back to the defaults.
#[endpoint(
    tags("payments"),
    summary = "List Transactions",
    parameters(
        ("perPage" = Option<u32>, Query, description = "Transactions per page"),
        ("page" = Option<u32>, Query, description = "Page number, from 1"),
    ),
    responses(
        (status_code = StatusCode::OK, description = "Transactions"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<TransactionsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let page = state
        .app
        .payments
        .list_transactions(req.query::<u32>("perPage"), req.query::<u32>("page"))
        .await
        .map_err(into_status_error)?;

    Ok(Json(page.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use dishpatch_app::domain::payments::{
        MockPaymentsService,
        models::{TransactionPage, TransactionSummary},
    };

    use crate::test_helpers::payments_service;

    use super::*;

    fn make_service(payments: MockPaymentsService) -> Service {
        payments_service(payments, Router::with_path("transactions").get(handler))
    }

    #[tokio::test]
    async fn test_transactions_pass_paging_through() -> TestResult {
        let mut payments = MockPaymentsService::new();

        payments
            .expect_list_transactions()
            .once()
            .withf(|per_page, page| *per_page == Some(10) && *page == Some(3))
            .return_once(|_, _| {
                Ok(TransactionPage {
                    transactions: vec![TransactionSummary {
                        reference: "T123".to_owned(),
                        amount: Decimal::new(1299, 2),
                        status: "success".to_owned(),
                        paid_at: None,
                        customer: None,
                    }],
                    meta: Some(json!({ "page": 3, "perPage": 10 })),
                })
            });

        let mut res = TestClient::get("http://example.com/transactions?perPage=10&page=3")
            .send(&make_service(payments))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(body["transactions"][0]["reference"], "T123");
        assert_eq!(body["transactions"][0]["amount"], 12.99);
        assert_eq!(body["meta"]["page"], 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_transactions_ignore_unparseable_paging() -> TestResult {
        let mut payments = MockPaymentsService::new();

        payments
            .expect_list_transactions()
            .once()
            .withf(|per_page, page| per_page.is_none() && page.is_none())
            .return_once(|_, _| {
                Ok(TransactionPage {
                    transactions: Vec::new(),
                    meta: None,
                })
            });

        let mut res = TestClient::get("http://example.com/transactions?perPage=lots&page=-1")
            .send(&make_service(payments))
            .await;

        let body: TransactionsResponse = res.take_json().await?;

        assert!(body.transactions.is_empty(), "mock returned no transactions");

        Ok(())
    }
}
