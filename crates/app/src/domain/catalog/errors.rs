//! Catalog service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogServiceError {
    #[error("catalog entry not found")]
    NotFound,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CatalogServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        Self::Sql(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let error = CatalogServiceError::from(Error::RowNotFound);

        assert!(matches!(error, CatalogServiceError::NotFound));
    }

    #[test]
    fn other_errors_map_to_sql() {
        let error = CatalogServiceError::from(Error::PoolTimedOut);

        assert!(matches!(error, CatalogServiceError::Sql(Error::PoolTimedOut)));
    }
}
