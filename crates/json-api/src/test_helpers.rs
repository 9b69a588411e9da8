//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use dishpatch_app::{
    context::AppContext,
    domain::{
        catalog::MockCatalogService,
        orders::MockOrdersService,
        payments::{MockPaymentsService, PaymentsService},
    },
};

use crate::state::State;

pub(crate) const TEST_PUBLIC_KEY: &str = "pk_test_public";

fn strict_catalog_mock() -> MockCatalogService {
    let mut catalog = MockCatalogService::new();

    catalog.expect_list_restaurants().never();
    catalog.expect_get_restaurant().never();
    catalog.expect_search_restaurants().never();
    catalog.expect_list_menu_items().never();
    catalog.expect_get_menu_item().never();
    catalog.expect_find_menu_items().never();

    catalog
}

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_create_order().never();
    orders.expect_list_orders().never();
    orders.expect_get_order().never();
    orders.expect_update_status().never();
    orders.expect_record_payment().never();

    orders
}

fn strict_payments_mock() -> MockPaymentsService {
    let mut payments = MockPaymentsService::new();

    payments.expect_initialize_transaction().never();
    payments.expect_verify_transaction().never();
    payments.expect_list_transactions().never();
    payments.expect_process_refund().never();
    payments.expect_list_banks().never();
    payments.expect_verify_signature().never();
    payments.expect_handle_webhook().never();

    payments
}

pub(crate) fn state_with(
    catalog: MockCatalogService,
    orders: MockOrdersService,
    payments: MockPaymentsService,
) -> Arc<State> {
    State::from_app_context(
        AppContext {
            catalog: Arc::new(catalog),
            orders: Arc::new(orders),
            payments: Arc::new(payments),
        },
        Some(TEST_PUBLIC_KEY.to_owned()),
    )
}

pub(crate) fn service_with(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}

pub(crate) fn catalog_service(catalog: MockCatalogService, route: Router) -> Service {
    service_with(
        state_with(catalog, strict_orders_mock(), strict_payments_mock()),
        route,
    )
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    service_with(
        state_with(strict_catalog_mock(), orders, strict_payments_mock()),
        route,
    )
}

pub(crate) fn orders_and_payments_service(
    orders: MockOrdersService,
    payments: MockPaymentsService,
    route: Router,
) -> Service {
    service_with(state_with(strict_catalog_mock(), orders, payments), route)
}

pub(crate) fn payments_service(payments: MockPaymentsService, route: Router) -> Service {
    service_with(
        state_with(strict_catalog_mock(), strict_orders_mock(), payments),
        route,
    )
}

pub(crate) fn empty_state() -> Arc<State> {
    state_with(
        strict_catalog_mock(),
        strict_orders_mock(),
        strict_payments_mock(),
    )
}

/// State around a real payments service, with strict mocks for the rest.
pub(crate) fn state_with_payments(payments: Arc<dyn PaymentsService>) -> Arc<State> {
    State::from_app_context(
        AppContext {
            catalog: Arc::new(strict_catalog_mock()),
            orders: Arc::new(strict_orders_mock()),
            payments,
        },
        Some(TEST_PUBLIC_KEY.to_owned()),
    )
}

pub(crate) fn strict_orders() -> Arc<MockOrdersService> {
    Arc::new(strict_orders_mock())
}
