//! Paystack REST client.

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::domain::payments::secret::SecretKey;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.paystack.co";

/// Configuration for connecting to Paystack.
#[derive(Debug, Clone)]
pub struct PaystackConfig {
    /// API root without a trailing slash, e.g. `"https://api.paystack.co"`.
    pub base_url: String,

    /// Secret key used as the bearer token and as the webhook signing key.
    pub secret_key: SecretKey,
}

impl PaystackConfig {
    #[must_use]
    pub fn new(secret_key: SecretKey) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            secret_key,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

/// HTTP client for the Paystack transaction, refund and bank APIs.
#[derive(Debug, Clone)]
pub struct PaystackClient {
    config: PaystackConfig,
    http: Client,
}

impl PaystackClient {
    #[must_use]
    pub fn new(config: PaystackConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    #[must_use]
    pub fn secret_key(&self) -> &SecretKey {
        &self.config.secret_key
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Envelope<T>, PaystackError> {
        let response = request
            .bearer_auth(self.config.secret_key.expose())
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        decode_envelope(status, &body)
    }

    /// `POST /transaction/initialize`
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure, a rejected request, or an unexpected
    /// response body.
    pub async fn initialize_transaction(
        &self,
        request: &InitializeRequest<'_>,
    ) -> Result<InitializeData, PaystackError> {
        debug!(amount = request.amount, "initializing transaction");

        self.send(self.http.post(self.url("/transaction/initialize")).json(request))
            .await?
            .into_data()
    }

    /// `GET /transaction/verify/{reference}`. `reference` must already be
    /// validated with [`is_valid_reference`].
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure, a rejected request, or an unexpected
    /// response body.
    pub async fn verify_transaction(
        &self,
        reference: &str,
    ) -> Result<TransactionData, PaystackError> {
        debug!(reference, "verifying transaction");

        self.send(
            self.http
                .get(self.url(&format!("/transaction/verify/{reference}"))),
        )
        .await?
        .into_data()
    }

    /// `GET /transaction?perPage=&page=`
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure, a rejected request, or an unexpected
    /// response body.
    pub async fn list_transactions(
        &self,
        per_page: u32,
        page: u32,
    ) -> Result<(Vec<TransactionData>, Option<Value>), PaystackError> {
        let envelope = self
            .send::<Vec<TransactionData>>(
                self.http
                    .get(self.url("/transaction"))
                    .query(&[("perPage", per_page), ("page", page)]),
            )
            .await?;

        let meta = envelope.meta.clone();

        Ok((envelope.into_data()?, meta))
    }

    /// `POST /refund`. Returns the provider message alongside the refund.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure, a rejected request, or an unexpected
    /// response body.
    pub async fn create_refund(
        &self,
        request: &RefundRequest<'_>,
    ) -> Result<(RefundData, String), PaystackError> {
        debug!(transaction = request.transaction, "requesting refund");

        let envelope = self
            .send::<RefundData>(self.http.post(self.url("/refund")).json(request))
            .await?;

        let message = envelope.message.clone();

        Ok((envelope.into_data()?, message))
    }

    /// `GET /bank`
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure, a rejected request, or an unexpected
    /// response body.
    pub async fn list_banks(&self) -> Result<Vec<BankData>, PaystackError> {
        self.send(self.http.get(self.url("/bank")))
            .await?
            .into_data()
    }
}

/// Whether `reference` is safe to embed in a request path. Dot-only
/// references are path segments (`.`, `..`) and would be normalised away.
#[must_use]
pub fn is_valid_reference(reference: &str) -> bool {
    !reference.is_empty()
        && !reference.chars().all(|c| c == '.')
        && reference
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '='))
}

/// Interpret a Paystack response. Every endpoint wraps its payload as
/// `{ status, message, data, meta }`; `status: false` is a rejection even on
/// a 2xx response.
pub(crate) fn decode_envelope<T: DeserializeOwned>(
    status: StatusCode,
    body: &[u8],
) -> Result<Envelope<T>, PaystackError> {
    if !status.is_success() {
        return Err(match serde_json::from_slice::<ErrorBody>(body) {
            Ok(ErrorBody {
                message: Some(message),
            }) if !message.is_empty() => PaystackError::Rejected(message),
            _ => PaystackError::UnexpectedResponse(format!(
                "request failed with status {status}: {}",
                String::from_utf8_lossy(body)
            )),
        });
    }

    let envelope: Envelope<T> = serde_json::from_slice(body)
        .map_err(|error| PaystackError::UnexpectedResponse(error.to_string()))?;

    if !envelope.status {
        return Err(PaystackError::Rejected(envelope.message));
    }

    Ok(envelope)
}

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    status: bool,
    #[serde(default)]
    message: String,
    data: Option<T>,
    #[serde(default)]
    meta: Option<Value>,
}

impl<T> Envelope<T> {
    fn into_data(self) -> Result<T, PaystackError> {
        self.data
            .ok_or_else(|| PaystackError::UnexpectedResponse("response has no data".to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Body of `POST /transaction/initialize`. `amount` is in minor units.
#[derive(Debug, Serialize)]
pub struct InitializeRequest<'a> {
    pub email: &'a str,
    pub amount: i64,
    pub callback_url: &'a str,
    pub metadata: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InitializeData {
    pub authorization_url: String,
    pub access_code: String,
    pub reference: String,
}

/// A transaction as returned by verify and list. `amount` is in minor units.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionData {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub currency: String,
    pub reference: String,
    pub paid_at: Option<String>,
    pub customer: Option<CustomerData>,
    #[serde(default)]
    pub metadata: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomerData {
    pub id: Option<i64>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub customer_code: Option<String>,
    pub phone: Option<String>,
}

/// Body of `POST /refund`. `amount` is in minor units; omitted for a full
/// refund.
#[derive(Debug, Serialize)]
pub struct RefundRequest<'a> {
    pub transaction: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefundData {
    #[serde(default)]
    pub status: String,
    pub amount: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BankData {
    pub id: i64,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub slug: String,
}

/// Errors that can occur when communicating with Paystack.
#[derive(Debug, Error)]
pub enum PaystackError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Paystack answered with `status: false` or an error status.
    #[error("request rejected by Paystack: {0}")]
    Rejected(String),

    /// The response body did not have the expected shape.
    #[error("unexpected response from Paystack: {0}")]
    UnexpectedResponse(String),
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn decodes_initialize_response() -> TestResult {
        let body = br#"{
            "status": true,
            "message": "Authorization URL created",
            "data": {
                "authorization_url": "https://checkout.paystack.com/0peioxfhpn",
                "access_code": "0peioxfhpn",
                "reference": "7PVGX8MEk85tgeEpVDtD"
            }
        }"#;

        let data = decode_envelope::<InitializeData>(StatusCode::OK, body)?.into_data()?;

        assert_eq!(data.access_code, "0peioxfhpn");
        assert_eq!(data.reference, "7PVGX8MEk85tgeEpVDtD");

        Ok(())
    }

    #[test]
    fn decodes_verify_response_with_customer_and_metadata() -> TestResult {
        let body = br#"{
            "status": true,
            "message": "Verification successful",
            "data": {
                "id": 4099260516,
                "status": "success",
                "reference": "re4lyvq3s3",
                "amount": 2598,
                "currency": "NGN",
                "paid_at": "2024-08-22T09:15:02.000Z",
                "metadata": { "orderId": "abc", "itemCount": 2 },
                "customer": {
                    "id": 181873746,
                    "first_name": null,
                    "last_name": null,
                    "email": "demo@test.com",
                    "customer_code": "CUS_1rkzaqsv4rrhqo6",
                    "phone": null
                }
            }
        }"#;

        let data = decode_envelope::<TransactionData>(StatusCode::OK, body)?.into_data()?;

        assert_eq!(data.status, "success");
        assert_eq!(data.amount, 2598);
        assert_eq!(data.paid_at.as_deref(), Some("2024-08-22T09:15:02.000Z"));
        assert_eq!(
            data.customer.and_then(|c| c.email).as_deref(),
            Some("demo@test.com")
        );
        assert_eq!(data.metadata["itemCount"], 2);

        Ok(())
    }

    #[test]
    fn tolerates_empty_string_metadata() -> TestResult {
        let body = br#"{
            "status": true,
            "message": "ok",
            "data": { "status": "abandoned", "reference": "r1", "amount": 100,
                      "currency": "NGN", "paid_at": null, "metadata": "", "customer": null }
        }"#;

        let data = decode_envelope::<TransactionData>(StatusCode::OK, body)?.into_data()?;

        assert_eq!(data.metadata, Value::String(String::new()));
        assert!(data.paid_at.is_none());

        Ok(())
    }

    #[test]
    fn keeps_list_meta() -> TestResult {
        let body = br#"{
            "status": true,
            "message": "Transactions retrieved",
            "data": [],
            "meta": { "total": 0, "skipped": 0, "perPage": 50, "page": 1, "pageCount": 0 }
        }"#;

        let envelope = decode_envelope::<Vec<TransactionData>>(StatusCode::OK, body)?;

        assert_eq!(
            envelope.meta.as_ref().and_then(|m| m.get("perPage")),
            Some(&Value::from(50))
        );
        assert!(envelope.into_data()?.is_empty());

        Ok(())
    }

    #[test]
    fn status_false_is_rejected_with_provider_message() {
        let body = br#"{ "status": false, "message": "Invalid key" }"#;

        let result = decode_envelope::<InitializeData>(StatusCode::OK, body);

        assert!(matches!(result, Err(PaystackError::Rejected(ref m)) if m == "Invalid key"));
    }

    #[test]
    fn error_status_uses_provider_message() {
        let body = br#"{ "status": false, "message": "Transaction reference not found" }"#;

        let result = decode_envelope::<TransactionData>(StatusCode::BAD_REQUEST, body);

        assert!(matches!(
            result,
            Err(PaystackError::Rejected(ref m)) if m == "Transaction reference not found"
        ));
    }

    #[test]
    fn error_status_without_json_is_unexpected() {
        let result = decode_envelope::<TransactionData>(StatusCode::BAD_GATEWAY, b"<html>");

        assert!(matches!(result, Err(PaystackError::UnexpectedResponse(_))));
    }

    #[test]
    fn malformed_success_body_is_unexpected() {
        let result = decode_envelope::<InitializeData>(StatusCode::OK, b"{\"status\": true,");

        assert!(matches!(result, Err(PaystackError::UnexpectedResponse(_))));
    }

    #[test]
    fn missing_data_is_unexpected() -> TestResult {
        let envelope =
            decode_envelope::<BankData>(StatusCode::OK, br#"{ "status": true, "message": "" }"#)?;

        assert!(matches!(
            envelope.into_data(),
            Err(PaystackError::UnexpectedResponse(_))
        ));

        Ok(())
    }

    #[test]
    fn refund_request_omits_amount_for_full_refunds() -> TestResult {
        let full = serde_json::to_value(RefundRequest {
            transaction: "ref_1",
            amount: None,
        })?;

        let partial = serde_json::to_value(RefundRequest {
            transaction: "ref_1",
            amount: Some(500),
        })?;

        assert_eq!(full, serde_json::json!({ "transaction": "ref_1" }));
        assert_eq!(partial, serde_json::json!({ "transaction": "ref_1", "amount": 500 }));

        Ok(())
    }

    #[test]
    fn reference_validation() {
        assert!(is_valid_reference("7PVGX8MEk85tgeEpVDtD"));
        assert!(is_valid_reference("order-1_2.3=4"));
        assert!(!is_valid_reference(""));
        assert!(!is_valid_reference("../bank"));
        assert!(!is_valid_reference("ref?x=1"));
        assert!(!is_valid_reference("ref with space"));
        assert!(!is_valid_reference("."));
        assert!(!is_valid_reference(".."));
        assert!(!is_valid_reference("..."));
        assert!(is_valid_reference("..ref"));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let config = PaystackConfig::new(SecretKey::new("sk_test"))
            .with_base_url("http://localhost:9999/");

        assert_eq!(config.base_url, "http://localhost:9999");
        assert_eq!(PaystackConfig::new(SecretKey::new("sk_test")).base_url, DEFAULT_BASE_URL);
    }
}
