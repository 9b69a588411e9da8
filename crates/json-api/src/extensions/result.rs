//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::{error, warn};

/// Map any error to a logged HTTP error.
pub(crate) trait ResultExt<T> {
    /// Internal server error. The cause is logged, never returned.
    fn or_500(self, context: &str) -> Result<T, StatusError>;

    /// Bad request carrying `context` as the brief.
    fn or_400(self, context: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            StatusError::internal_server_error()
        })
    }

    fn or_400(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            warn!("{context}: {error}");

            StatusError::bad_request().brief(context)
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn or_400_keeps_ok_values() -> Result<(), StatusError> {
        let value = Ok::<_, String>(7).or_400("bad input")?;

        assert_eq!(value, 7);

        Ok(())
    }

    #[test]
    fn or_400_maps_errors_to_bad_request() {
        let error = Err::<(), _>("nope").or_400("bad input").err();

        assert_eq!(error.map(|e| e.code), Some(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn or_500_maps_errors_to_internal_server_error() {
        let error = Err::<(), _>("boom").or_500("storage").err();

        assert_eq!(
            error.map(|e| e.code),
            Some(StatusCode::INTERNAL_SERVER_ERROR)
        );
    }
}
