//! Payments Config

use clap::Args;

use dishpatch_app::domain::payments::{
    paystack::{DEFAULT_BASE_URL, PaystackConfig},
    secret::SecretKey,
};

/// Paystack settings.
#[derive(Args)]
pub struct PaymentsConfig {
    /// Paystack secret key. Also keys webhook signatures.
    #[arg(long, env = "PAYSTACK_SECRET_KEY", hide_env_values = true)]
    pub paystack_secret_key: String,

    /// Paystack public key handed to the web client's payment widget
    #[arg(long, env = "PAYSTACK_PUBLIC_KEY")]
    pub paystack_public_key: Option<String>,

    /// Paystack API base URL
    #[arg(long, env = "PAYSTACK_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub paystack_base_url: String,
}

impl PaymentsConfig {
    /// Moves the secret into a zeroizing wrapper.
    #[must_use]
    pub fn into_paystack_config(self) -> (PaystackConfig, Option<String>) {
        let config = PaystackConfig::new(SecretKey::new(self.paystack_secret_key))
            .with_base_url(self.paystack_base_url);

        (config, self.paystack_public_key)
    }
}

impl std::fmt::Debug for PaymentsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentsConfig")
            .field("paystack_secret_key", &"[redacted]")
            .field("paystack_public_key", &self.paystack_public_key)
            .field("paystack_base_url", &self.paystack_base_url)
            .finish()
    }
}
