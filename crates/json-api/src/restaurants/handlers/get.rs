//! Get Restaurant Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    restaurants::{errors::into_status_error, models::RestaurantResponse},
    state::State,
};

/// Get Restaurant Handler
#[endpoint(
    tags("restaurants"),
    summary = "Get Restaurant",
    responses(
        (status_code = StatusCode::OK, description = "Restaurant found"),
        (status_code = StatusCode::NOT_FOUND, description = "Restaurant not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    restaurant: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<RestaurantResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let restaurant = state
        .app
        .catalog
        .get_restaurant(restaurant.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(restaurant.into()))
}
