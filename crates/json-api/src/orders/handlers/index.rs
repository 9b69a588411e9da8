//! Order Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    extensions::*,
    orders::{errors::into_status_error, models::OrderResponse},
    state::State,
};

/// Order Index Handler
///
/// Returns orders newest first, optionally only those of one user.
#[endpoint(
    tags("orders"),
    summary = "List Orders",
    parameters(("userId" = Option<String>, Query, description = "Only orders placed by this user")),
    responses(
        (status_code = StatusCode::OK, description = "Orders"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Vec<OrderResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user_id = req
        .query::<String>("userId")
        .filter(|user_id| !user_id.trim().is_empty());

    let orders = state
        .app
        .orders
        .list_orders(user_id)
        .await
        .map_err(into_status_error)?;

    Ok(Json(orders.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use dishpatch_app::domain::orders::{
        MockOrdersService, OrderStatus, OrdersServiceError, records::OrderUuid,
    };

    use crate::test_helpers::orders_service;

    use super::{super::tests::make_order, *};

    fn make_service(orders: MockOrdersService) -> Service {
        orders_service(orders, Router::with_path("orders").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_all_orders() -> TestResult {
        let newer = OrderUuid::new();
        let older = OrderUuid::new();

        let mut orders = MockOrdersService::new();

        orders
            .expect_list_orders()
            .once()
            .withf(Option::is_none)
            .return_once(move |_| {
                Ok(vec![
                    make_order(newer, OrderStatus::Preparing),
                    make_order(older, OrderStatus::Delivered),
                ])
            });

        let mut res = TestClient::get("http://example.com/orders")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: Vec<OrderResponse> = res.take_json().await?;
        let ids: Vec<_> = body.iter().map(|order| order.id).collect();

        assert_eq!(ids, [newer.into_uuid(), older.into_uuid()]);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_filters_by_user() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_list_orders()
            .once()
            .withf(|user_id| user_id.as_deref() == Some("user-1"))
            .return_once(|_| Ok(Vec::new()));

        let mut res = TestClient::get("http://example.com/orders?userId=user-1")
            .send(&make_service(orders))
            .await;

        let body: Vec<OrderResponse> = res.take_json().await?;

        assert!(body.is_empty(), "mock returned no orders");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_storage_failure_returns_500() {
        let mut orders = MockOrdersService::new();

        orders
            .expect_list_orders()
            .once()
            .return_once(|_| Err(OrdersServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let res = TestClient::get("http://example.com/orders")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
