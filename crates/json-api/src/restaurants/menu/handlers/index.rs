//! Menu Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    restaurants::{errors::into_status_error, models::MenuItemResponse},
    state::State,
};

/// Menu Index Handler
///
/// Unknown restaurants have an empty menu.
#[endpoint(
    tags("restaurants"),
    summary = "List Menu Items",
    responses(
        (status_code = StatusCode::OK, description = "Menu items"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    restaurant: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<Vec<MenuItemResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let items = state
        .app
        .catalog
        .list_menu_items(restaurant.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(items.into_iter().map(Into::into).collect()))
}
