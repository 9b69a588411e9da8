//! Catalog Errors

use salvo::http::StatusError;
use tracing::error;

use dishpatch_app::domain::catalog::CatalogServiceError;

pub(crate) fn into_status_error(error: CatalogServiceError) -> StatusError {
    match error {
        CatalogServiceError::NotFound => StatusError::not_found().brief("Not found"),
        CatalogServiceError::Sql(source) => {
            error!("catalog query failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
