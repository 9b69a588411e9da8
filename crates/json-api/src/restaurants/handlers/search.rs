//! Restaurant Search Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    extensions::*,
    restaurants::{errors::into_status_error, models::RestaurantResponse},
    state::State,
};

/// Restaurant Search Handler
///
/// Case-insensitive substring match on name or cuisine. A missing or blank
/// query returns every restaurant.
#[endpoint(
    tags("restaurants"),
    summary = "Search Restaurants",
    responses(
        (status_code = StatusCode::OK, description = "Matching restaurants"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    q: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<RestaurantResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let restaurants = state
        .app
        .catalog
        .search_restaurants(q.into_inner().unwrap_or_default())
        .await
        .map_err(into_status_error)?;

    Ok(Json(restaurants.into_iter().map(Into::into).collect()))
}
