//! Restaurant Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    restaurants::{errors::into_status_error, models::RestaurantResponse},
    state::State,
};

/// Restaurant Index Handler
///
/// Returns every restaurant, highest rated first.
#[endpoint(
    tags("restaurants"),
    summary = "List Restaurants",
    responses(
        (status_code = StatusCode::OK, description = "Restaurants"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<RestaurantResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let restaurants = state
        .app
        .catalog
        .list_restaurants()
        .await
        .map_err(into_status_error)?;

    Ok(Json(restaurants.into_iter().map(Into::into).collect()))
}
