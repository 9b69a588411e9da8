//! App Router

use salvo::{
    Router,
    cors::{Cors, CorsHandler},
    http::Method,
};

use crate::{healthcheck, orders, payments, restaurants};

/// Every JSON route, mounted under `/api`.
pub(crate) fn api_router() -> Router {
    Router::with_path("api")
        .push(Router::with_path("health").get(healthcheck::handler))
        .push(
            Router::with_path("restaurants")
                .get(restaurants::index::handler)
                .push(Router::with_path("search").get(restaurants::search::handler))
                .push(
                    Router::with_path("{restaurant}")
                        .get(restaurants::get::handler)
                        .push(
                            Router::with_path("menu")
                                .get(restaurants::menu::index::handler)
                                .push(
                                    Router::with_path("{item}")
                                        .get(restaurants::menu::get::handler),
                                ),
                        ),
                ),
        )
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .post(orders::create::handler)
                .push(
                    Router::with_path("{order}")
                        .get(orders::get::handler)
                        .push(Router::with_path("status").patch(orders::update_status::handler)),
                ),
        )
        .push(Router::with_path("initialize-payment").post(payments::initialize::handler))
        .push(Router::with_path("verify-payment/{reference}").get(payments::verify::handler))
        .push(Router::with_path("transactions").get(payments::transactions::handler))
        .push(Router::with_path("refund").post(payments::refund::handler))
        .push(Router::with_path("banks").get(payments::banks::handler))
        .push(Router::with_path("payment-config").get(payments::config::handler))
        .push(Router::with_path("webhook").post(payments::webhook::handler))
}

/// CORS for the web client: one origin, with credentials.
pub(crate) fn cors(frontend_url: &str) -> CorsHandler {
    Cors::new()
        .allow_origin(frontend_url.trim_end_matches('/'))
        .allow_credentials(true)
        .allow_methods(vec![Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers("content-type")
        .into_handler()
}
