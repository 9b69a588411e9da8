//! Payment Config Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, state::State};

/// Client-side payment settings
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaymentConfigResponse {
    /// Paystack public key, when configured
    pub public_key: Option<String>,
}

/// Payment Config Handler
///
/// Public settings the web client needs for the payment widget.
#[endpoint(tags("payments"), summary = "Payment Config")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<PaymentConfigResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    Ok(Json(PaymentConfigResponse {
        public_key: state.paystack_public_key.clone(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{TEST_PUBLIC_KEY, empty_state, service_with};

    use super::*;

    #[tokio::test]
    async fn test_payment_config_exposes_public_key() -> TestResult {
        let service = service_with(
            empty_state(),
            Router::with_path("payment-config").get(handler),
        );

        let body: serde_json::Value = TestClient::get("http://example.com/payment-config")
            .send(&service)
            .await
            .take_json()
            .await?;

        assert_eq!(body["publicKey"], TEST_PUBLIC_KEY);

        Ok(())
    }
}
