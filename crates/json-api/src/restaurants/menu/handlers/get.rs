//! Get Menu Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    restaurants::{errors::into_status_error, models::MenuItemResponse},
    state::State,
};

/// Get Menu Item Handler
///
/// The item must belong to the restaurant in the path.
#[endpoint(
    tags("restaurants"),
    summary = "Get Menu Item",
    responses(
        (status_code = StatusCode::OK, description = "Menu item found"),
        (status_code = StatusCode::NOT_FOUND, description = "Menu item not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    restaurant: PathParam<String>,
    item: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<MenuItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let item = state
        .app
        .catalog
        .get_menu_item(restaurant.into_inner(), item.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(item.into()))
}
